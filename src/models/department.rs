use super::resource_schemas;

resource_schemas! {
    /// Server representation of an academic department.
    Department {
        create: DepartmentCreate,
        update: DepartmentUpdate,
        owner: staff,
        date: founding_date,
    }
}

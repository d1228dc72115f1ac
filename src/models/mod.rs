pub mod department;
pub mod lecture;

/// Defines one resource schema group: the server-side read struct plus
/// its create and update payloads. The two resource types differ only
/// in the owner and date field names, so the group is generated from
/// those identifiers instead of being written out twice.
macro_rules! resource_schemas {
    (
        $(#[$read_doc:meta])*
        $read:ident {
            create: $create:ident,
            update: $update:ident,
            owner: $owner:ident,
            date: $date:ident $(,)?
        }
    ) => {
        $(#[$read_doc])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $read {
            pub id: uuid::Uuid,
            pub code: String,
            pub $owner: String,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $date: Option<chrono::NaiveDate>,
            pub created_at: chrono::DateTime<chrono::Utc>,
            pub updated_at: chrono::DateTime<chrono::Utc>,
        }

        /// Creation payload; `id` and timestamps are assigned by the
        /// persistence layer, never by the client.
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, validator::Validate)]
        pub struct $create {
            #[validate(regex(
                path = *crate::utils::validation::UNI_RE,
                message = "must be 2-3 lowercase letters followed by 1-4 digits"
            ))]
            pub code: String,
            #[validate(length(min = 1))]
            pub $owner: String,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $date: Option<chrono::NaiveDate>,
        }

        /// Partial update; supply only the fields to change. The empty
        /// update is valid and means "no changes".
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize, validator::Validate)]
        pub struct $update {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            #[validate(regex(
                path = *crate::utils::validation::UNI_RE,
                message = "must be 2-3 lowercase letters followed by 1-4 digits"
            ))]
            pub code: Option<String>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            #[validate(length(min = 1))]
            pub $owner: Option<String>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $date: Option<chrono::NaiveDate>,
        }

        impl $read {
            /// Builds the read representation of a freshly persisted
            /// record. `id` and `created_at` come from the persistence
            /// layer; `updated_at` starts equal to `created_at`.
            pub fn from_create(
                create: $create,
                id: uuid::Uuid,
                created_at: chrono::DateTime<chrono::Utc>,
            ) -> Self {
                Self {
                    id,
                    code: create.code,
                    $owner: create.$owner,
                    $date: create.$date,
                    created_at,
                    updated_at: created_at,
                }
            }

            /// Merges a partial update into the record. Absent fields
            /// are left untouched; `updated_at` is refreshed.
            pub fn apply_update(
                &mut self,
                update: $update,
                updated_at: chrono::DateTime<chrono::Utc>,
            ) {
                if let Some(code) = update.code {
                    self.code = code;
                }
                if let Some(value) = update.$owner {
                    self.$owner = value;
                }
                if let Some(value) = update.$date {
                    self.$date = Some(value);
                }
                self.updated_at = updated_at;
            }
        }
    };
}

pub(crate) use resource_schemas;

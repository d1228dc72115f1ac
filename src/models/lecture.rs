use super::resource_schemas;

resource_schemas! {
    /// Server representation of a lecture offering.
    Lecture {
        create: LectureCreate,
        update: LectureUpdate,
        owner: professor,
        date: start_date,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;
    use validator::Validate;

    use super::*;
    use crate::utils::validation::validate_payload;

    fn create_payload() -> LectureCreate {
        LectureCreate {
            code: "cs101".to_string(),
            professor: "Ada".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 2),
        }
    }

    #[test]
    fn create_with_valid_code_passes() {
        assert!(validate_payload(&create_payload()).is_ok());
    }

    #[test]
    fn create_with_bad_code_fails_on_code() {
        let payload = LectureCreate {
            code: "CS101".to_string(),
            ..create_payload()
        };
        let err = validate_payload(&payload).unwrap_err();
        assert_eq!(err.failed_fields(), vec!["code".to_string()]);
    }

    #[test]
    fn start_date_is_optional() {
        let payload: LectureCreate =
            serde_json::from_str(r#"{"code": "cs101", "professor": "Ada"}"#).unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.start_date, None);
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(LectureUpdate::default().validate().is_ok());
    }

    #[test]
    fn update_code_is_pattern_checked() {
        let update = LectureUpdate {
            code: Some("toolong123".to_string()),
            professor: None,
            start_date: None,
        };
        assert!(update.validate().is_err());

        let update = LectureUpdate {
            code: Some("ab12".to_string()),
            professor: None,
            start_date: None,
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn apply_update_keeps_absent_fields() {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 20, 30).unwrap();
        let updated_at = Utc.with_ymd_and_hms(2025, 1, 16, 12, 0, 0).unwrap();
        let mut lecture = Lecture::from_create(create_payload(), Uuid::new_v4(), created_at);

        lecture.apply_update(
            LectureUpdate {
                code: Some("cs102".to_string()),
                professor: None,
                start_date: None,
            },
            updated_at,
        );

        assert_eq!(lecture.code, "cs102");
        assert_eq!(lecture.professor, "Ada");
        assert_eq!(lecture.start_date, NaiveDate::from_ymd_opt(2025, 9, 2));
        assert_eq!(lecture.updated_at, updated_at);
    }
}

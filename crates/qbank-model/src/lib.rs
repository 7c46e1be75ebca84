pub mod course;
pub mod group;
pub mod metadata;

pub use course::{Course, CourseId};
pub use group::FileGroup;
pub use metadata::{ParsedFilenameMetadata, RATT_SOURCE_ID, Rotation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_serializes() {
        let metadata = ParsedFilenameMetadata {
            exam_year: Some(2018),
            course: Some("pit".to_string()),
            rotation: Some(Rotation::R1),
            is_ratt: true,
            source_id: Some(RATT_SOURCE_ID),
        };
        let json = serde_json::to_string(&metadata).expect("serialize metadata");
        let round: ParsedFilenameMetadata =
            serde_json::from_str(&json).expect("deserialize metadata");
        assert_eq!(round, metadata);
    }

    #[test]
    fn course_deserializes_from_catalog_entry() {
        let course: Course =
            serde_json::from_str(r#"{"id":1,"name":"Cardiologie"}"#).expect("deserialize course");
        assert_eq!(course.id, 1);
        assert_eq!(course.name, "Cardiologie");
    }
}

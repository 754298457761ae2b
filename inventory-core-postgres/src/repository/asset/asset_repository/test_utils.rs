#[cfg(test)]
pub mod test_utils {
    use inventory_core_api::{AssetDraft, RecordSchema};
    use inventory_core_db::models::asset::AssetRecord;
    use uuid::Uuid;

    /// A valid IT asset with a unique service tag, safe to create in a
    /// shared test database.
    pub fn new_test_asset() -> AssetRecord {
        let schema = RecordSchema::it_assets();
        let tag = format!("SVC-{}", Uuid::new_v4().simple());
        let draft = AssetDraft::new()
            .set("serviceTag", tag)
            .set("model", "Latitude 5520")
            .set("status", "Stored")
            .set("location", "Depot");
        AssetRecord::from_draft(&schema, &draft).expect("test asset draft is valid")
    }
}

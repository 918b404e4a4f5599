#[derive(Debug, Clone)]
pub enum OrchestratorMode {
    Csv {
        customers_file: String,
        updates_file: String,
    },
}

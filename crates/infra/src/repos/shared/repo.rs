/// How many rows a delete query removed
#[derive(Debug, Clone, Copy)]
pub struct DeleteResult {
    pub deleted_count: i64,
}

use crate::dtos::NotificationResultDTO;
use serde::{Deserialize, Serialize};

pub mod process_due_notifications {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum APIResponse {
        /// The worker ran and attempted the due jobs
        Processed {
            processed: usize,
            results: Vec<NotificationResultDTO>,
        },
        /// The worker did not run, e.g. because no push provider is
        /// configured
        Skipped { message: String },
    }
}

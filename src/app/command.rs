use crate::app::state::toast::ToastId;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RunQuery {
        sample: String,
        query: String,
    },
    Export {
        filename: String,
        mime_type: String,
        content: String,
    },
    ScheduleToastExpiry {
        id: ToastId,
        duration: Duration,
    },
    CancelToastExpiry(ToastId),
}

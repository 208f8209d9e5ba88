mod id_macro;
mod member_id;
mod record_id;

pub use member_id::MemberId;
pub use record_id::{RecordId, RowKey};

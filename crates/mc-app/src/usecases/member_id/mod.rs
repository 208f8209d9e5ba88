mod generate_member_id;

pub use generate_member_id::{GenerateMemberId, GenerateMemberIdError};

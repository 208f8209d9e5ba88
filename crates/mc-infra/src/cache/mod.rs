mod member_detail_cache;

pub use member_detail_cache::InMemoryMemberDetailCache;

// Entity Models
//
// Each entity is an immutable value built once per run:
// - Party: fixed label set, the grouping and sort key
// - Member: one parliament member that passed the period filter
// - Faction: a party plus its members, created lazily while grouping

pub mod party;
pub mod member;
pub mod faction;

pub use party::Party;
pub use member::Member;
pub use faction::Faction;

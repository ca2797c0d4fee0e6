//! Types shared across the filtering core and the terminal adapter.

mod block;
mod fields;
mod record;
mod session;

pub use block::{FieldLine, OrgBlock};
pub use fields::{
    CATEGORIES, DETAIL_FIELDS, FieldSpec, LinkKind, ORGANIZATION_NAME, TYPES_OF_ASSISTANCE,
};
pub use record::OrgRecord;
pub use session::SessionOutcome;

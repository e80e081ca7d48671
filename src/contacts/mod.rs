//! Contacts pipeline: parsing vCard exports, normalizing numbers,
//! and rendering the MicroSIP contact list.
//!
//! - [`parse_export`] turns a raw address book export into [`ContactRecord`]s
//! - [`normalize_number`] makes a number dialable with the configured prefix
//! - [`export_contacts`] writes `Contacts.xml`

mod export;
mod normalize;
mod record;
mod vcard;


pub use export::{
    ExportError, ExportSummary, RenderError, XML_DECLARATION, export_contacts, render_contacts,
    render_record,
};
pub use normalize::{TRUNK_PREFIX, normalize_number};
pub use record::{ContactRecord, PhoneEntry, PhoneKind};
pub use vcard::{ParseError, RECORD_TERMINATOR, parse_export, parse_record};

//! The deterministic rule catalog.
//!
//! One module per check. Each check compiles its patterns once, scans the
//! full document text, and emits findings with a fixed category, severity,
//! and score policy. Checks never look at each other's output.

pub mod audit_dates;
pub mod customer_concentration;
pub mod deferred_disclosure;
pub mod lexicon;
pub mod liability_survival;
pub mod missing_schedules;
pub mod offshore_jurisdiction;
pub mod payment_terms;
pub mod weasel_words;

mod window;

pub use audit_dates::AuditDateCheck;
pub use customer_concentration::CustomerConcentrationCheck;
pub use deferred_disclosure::DeferredDisclosureCheck;
pub use liability_survival::LiabilitySurvivalCheck;
pub use missing_schedules::MissingScheduleCheck;
pub use offshore_jurisdiction::OffshoreJurisdictionCheck;
pub use payment_terms::PaymentTermCheck;
pub use weasel_words::WeaselWordCheck;

pub(crate) use window::context_window;

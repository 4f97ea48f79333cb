pub mod censoredstring;
pub mod configuration;
pub mod contact;
pub mod delivery;
pub mod form;
pub mod notification;
pub mod pipeline;
pub mod rate_limit;
pub mod sanitize;
pub mod telemetry;

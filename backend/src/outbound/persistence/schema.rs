//! Diesel table definitions.
//!
//! The primary and the replica carry the same single table. Creating it is an
//! operator concern; this file must match it exactly:
//!
//! ```sql
//! CREATE TABLE details (
//!     id    SERIAL PRIMARY KEY,
//!     email VARCHAR(255) NOT NULL,
//!     name  VARCHAR(100)
//! );
//! ```

diesel::table! {
    /// Email records with an optional display name.
    details (id) {
        /// Serial primary key assigned by each store independently.
        id -> Int4,
        /// Required email address (max 255 characters).
        email -> Varchar,
        /// Optional display name (max 100 characters).
        name -> Nullable<Varchar>,
    }
}

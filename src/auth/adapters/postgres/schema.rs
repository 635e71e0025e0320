//! Diesel schema for user persistence.

diesel::table! {
    /// Registered users and their password digests.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Unique login name.
        #[max_length = 20]
        username -> Varchar,
        /// Salted one-way password digest.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

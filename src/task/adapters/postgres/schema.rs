//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped to their owning user.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Monotonic insertion position used for stable listing order.
        position -> Int8,
        /// Identifier of the owning user.
        owner_id -> Uuid,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last status-change timestamp.
        updated_at -> Timestamptz,
    }
}

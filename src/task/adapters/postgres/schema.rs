//! Diesel schema for task persistence.

diesel::table! {
    /// Todo task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Task description, possibly empty.
        #[max_length = 1000]
        description -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Priority in storage form.
        #[max_length = 16]
        priority -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}

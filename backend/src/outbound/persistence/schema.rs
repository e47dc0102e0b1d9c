//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database schema exactly. The schema is
//! owned outside this service; regenerate with `diesel print-schema` when it
//! changes.

diesel::table! {
    /// Registered users; read-only to this service.
    users (id) {
        id -> Int8,
        user_name -> Varchar,
        email -> Varchar,
    }
}

diesel::table! {
    /// Mailing addresses, one per translator.
    addresses (id) {
        id -> Int8,
        street -> Varchar,
        city -> Varchar,
        state -> Varchar,
        postal_code -> Varchar,
    }
}

diesel::table! {
    /// Translator profiles.
    ///
    /// `user_id` and `address_id` reference `users` and `addresses`; the
    /// address foreign key is unique so each address has one translator.
    translators (id) {
        id -> Int8,
        user_id -> Int8,
        address_id -> Int8,
        age -> Int4,
        gender -> Varchar,
        phone -> Varchar,
        cin -> Varchar,
        image -> Text,
        description -> Text,
        price -> Float8,
    }
}

diesel::joinable!(translators -> addresses (address_id));
diesel::joinable!(translators -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(addresses, translators, users);

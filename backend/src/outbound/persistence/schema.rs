//! Diesel table definitions mirroring `backend/migrations`.

diesel::table! {
    users (id) {
        id -> Int4,
        #[max_length = 30]
        username -> Varchar,
        #[max_length = 60]
        email -> Varchar,
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    jobs (id) {
        id -> Int4,
        title -> Text,
        description -> Text,
        category -> Text,
        duration -> Text,
    }
}

diesel::table! {
    clients (id) {
        id -> Int4,
        user_id -> Int4,
        #[max_length = 30]
        name -> Varchar,
        email -> Text,
        #[max_length = 12]
        phone -> Varchar,
        company -> Nullable<Text>,
        address -> Nullable<Text>,
        #[max_length = 1000]
        notes -> Varchar,
    }
}

diesel::table! {
    orders (id) {
        id -> Int4,
        user_id -> Int4,
        client_id -> Int4,
        job_id -> Int4,
        description -> Text,
        rate -> Text,
        location -> Text,
        start_date -> Date,
        due_date -> Date,
        #[max_length = 16]
        status -> Varchar,
    }
}

diesel::joinable!(clients -> users (user_id));
diesel::joinable!(orders -> clients (client_id));
diesel::joinable!(orders -> jobs (job_id));
diesel::joinable!(orders -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(clients, jobs, orders, users);

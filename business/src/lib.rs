pub mod application {
    pub mod favorite {
        pub mod add;
        pub mod get_item_ids;
        pub mod get_items;
        pub mod remove;
    }
    pub mod item {
        pub mod get_by_id;
        pub mod get_categories;
        pub mod save;
        pub mod search;
    }
    pub mod user {
        pub mod get_full_name;
        pub mod verify_login;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod favorite {
        pub mod errors;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_item_ids;
            pub mod get_items;
            pub mod remove;
        }
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_categories;
            pub mod save;
            pub mod search;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_full_name;
            pub mod verify_login;
        }
    }
}

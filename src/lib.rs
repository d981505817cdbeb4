// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.
// - The warmup binary in shell/ composes the application and adapters layers.

pub mod core {
    pub mod clock;
    pub mod event_type;
    pub mod ports;
    pub mod queue;
    pub mod wallet;
}

pub mod fixtures {
    pub mod events;
}

pub mod application {
    pub mod errors;
    pub mod warmup {
        pub mod requests;
        pub mod runner;
    }
}

pub mod adapters {
    pub mod codec;
    pub mod in_memory {
        pub mod recording_handler;
    }
}

pub mod shell {
    pub mod config;
}

use self::adapters::EmitToLoggingAdapter;

pub mod adapters;

pub struct EventLoggingModule {
    pub publish_adapter: EmitToLoggingAdapter,
}

impl EventLoggingModule {
    pub fn initialize() -> Self {
        Self {
            publish_adapter: EmitToLoggingAdapter {},
        }
    }
}

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use mockall::mock;
use reqwest::StatusCode;
use tracing::{Event, Level, Subscriber, field, subscriber::DefaultGuard};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

use crate::compute::{
    ComputeDeleteImage, ComputeDeleteKeypair, ComputeDeleteServer, ComputeError,
    ComputeListImages, ComputeListKeypairs, ComputeListServers, ImageSummary, KeypairSummary,
    ServerSummary,
};

mock! {
    pub Compute {}

    impl ComputeListKeypairs for Compute {
        async fn list_keypairs(&self) -> Result<Vec<KeypairSummary>, ComputeError>;
    }

    impl ComputeListServers for Compute {
        async fn list_servers(&self) -> Result<Vec<ServerSummary>, ComputeError>;
    }

    impl ComputeListImages for Compute {
        async fn list_images(&self) -> Result<Vec<ImageSummary>, ComputeError>;
    }

    impl ComputeDeleteKeypair for Compute {
        async fn delete_keypair(&self, name: &str) -> Result<(), ComputeError>;
    }

    impl ComputeDeleteServer for Compute {
        async fn delete_server(&self, server_id: &str) -> Result<(), ComputeError>;
    }

    impl ComputeDeleteImage for Compute {
        async fn delete_image(&self, image_id: &str) -> Result<(), ComputeError>;
    }
}

pub fn keypair(name: &str) -> KeypairSummary {
    KeypairSummary {
        name: name.to_string(),
    }
}

pub fn server(id: &str, name: &str) -> ServerSummary {
    ServerSummary {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn image(id: &str, name: &str) -> ImageSummary {
    ImageSummary {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn server_error() -> ComputeError {
    ComputeError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "Internal Server Error".to_string(),
    }
}

/// Records the level and message of every event logged on the current thread.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CapturedLogs {
    /// Starts capturing. Events are recorded until the returned guard is dropped.
    pub fn start() -> (CapturedLogs, DefaultGuard) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::registry().with(logs.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));
        self.lines
            .lock()
            .unwrap()
            .push((*event.metadata().level(), message));
    }
}

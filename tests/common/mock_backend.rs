//! Mock user endpoint for testing the HTTP source.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::Response;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

struct Shared {
    status: u16,
    body: String,
    hits: AtomicUsize,
}

/// A local server answering `GET /users` with a fixed status and body.
pub struct MockBackend {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

impl MockBackend {
    pub async fn start(status: u16, body: &str) -> Self {
        let shared = Arc::new(Shared {
            status,
            body: body.to_string(),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/users", get(users))
            .with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, shared }
    }

    pub async fn json(body: &str) -> Self {
        Self::start(200, body).await
    }

    pub fn url(&self) -> String {
        format!("http://{}/users", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.shared.hits.load(Ordering::SeqCst)
    }
}

async fn users(State(shared): State<Arc<Shared>>) -> Response<Body> {
    shared.hits.fetch_add(1, Ordering::SeqCst);
    Response::builder()
        .status(shared.status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(shared.body.clone()))
        .unwrap()
}

/// An address nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/users", addr)
}

pub const TWO_USERS: &str = r#"[
  {
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "address": {
      "street": "Kulas Light",
      "suite": "Apt. 556",
      "city": "Gwenborough",
      "zipcode": "92998-3874",
      "geo": { "lat": "-37.3159", "lng": "81.1496" }
    },
    "phone": "1-770-736-8031 x56442",
    "website": "hildegard.org",
    "company": {
      "name": "Romaguera-Crona",
      "catchPhrase": "Multi-layered client-server neural-net",
      "bs": "harness real-time e-markets"
    }
  },
  {
    "id": 2,
    "name": "Ervin Howell",
    "username": "Antonette",
    "email": "Shanna@melissa.tv",
    "phone": "010-692-6593 x09125",
    "website": "anastasia.net"
  }
]"#;

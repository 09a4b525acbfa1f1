//! End-to-end listing test against a live server.
//!
//! # Design
//! Starts the server on a random port with a seeded in-memory store, then
//! exercises the core client over real HTTP using ureq. Validates that the
//! client's request building and response parsing agree with the server.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, TodoClient};
use todo_server::{AppState, MemoryStore, NewTodo};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut request = match req.method {
        HttpMethod::Get => agent.get(&req.path),
    };
    for (name, value) in &req.headers {
        request = request.header(name, value);
    }
    let mut response = request.call().expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse { status, body }
}

fn seed(owner: &str, status: bool, category: &str, body: &str) -> NewTodo {
    NewTodo {
        owner: owner.to_string(),
        status,
        category: category.to_string(),
        body: body.to_string(),
    }
}

/// Start the server on a random port in a background thread and return its
/// base URL.
fn spawn_server(store: MemoryStore) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, AppState::new(store)).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn list_lifecycle() {
    // Step 1: start the server over a store that will be filled later.
    let store = MemoryStore::new();
    let client = TodoClient::new(&spawn_server(store.clone()));

    // Step 2: empty store lists nothing.
    let todos = client.parse_list_todos(execute(client.build_list_todos(None))).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 3: seed five todos.
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let inserted = rt.block_on(store.insert_many([
        seed("Chris", false, "software design", "Todo 0"),
        seed("Pat", true, "homework", "Todo 1"),
        seed("Jamie", true, "homework", "Todo 2"),
        seed("Chris", true, "software design", "Todo 3"),
        seed("Pat", false, "video games", "Todo 4"),
    ]));

    // Step 4: no limit returns all five, as inserted.
    let todos = client.parse_list_todos(execute(client.build_list_todos(None))).unwrap();
    assert_eq!(todos.len(), 5);
    for (listed, stored) in todos.iter().zip(&inserted) {
        assert_eq!(listed.id, stored.id);
        assert_eq!(listed.owner, stored.owner);
        assert_eq!(listed.status, stored.status);
        assert_eq!(listed.category, stored.category);
        assert_eq!(listed.body, stored.body);
    }

    // Step 5: limit=3 returns three.
    let todos = client.parse_list_todos(execute(client.build_list_todos(Some(3)))).unwrap();
    assert_eq!(todos.len(), 3);

    // Step 6: limit=0 returns everything.
    let todos = client.parse_list_todos(execute(client.build_list_todos(Some(0)))).unwrap();
    assert_eq!(todos.len(), 5);

    // Step 7: a limit above the record count returns everything.
    let todos = client.parse_list_todos(execute(client.build_list_todos(Some(50)))).unwrap();
    assert_eq!(todos.len(), 5);

    // Step 8: a negative limit is rejected with the server's message.
    let mut req = client.build_list_todos(None);
    req.path.push_str("?limit=-1");
    let err = client.parse_list_todos(execute(req)).unwrap_err();
    assert!(
        matches!(err, ApiError::InvalidParameter(ref m) if m == "limit must be a non-negative integer"),
        "unexpected error: {err:?}"
    );

    // Step 9: so is a non-numeric one.
    let mut req = client.build_list_todos(None);
    req.path.push_str("?limit=abc");
    let err = client.parse_list_todos(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter(_)), "unexpected error: {err:?}");
}

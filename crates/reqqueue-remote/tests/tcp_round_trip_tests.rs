#![allow(clippy::unwrap_used, clippy::expect_used)]

use reqqueue_core::{CommandRunner, CommandStatus, EmploymentRequest, Evaluator};
use reqqueue_engine::EmploymentRequestCommands;
use reqqueue_remote::frame;
use reqqueue_remote::{RemoteRunner, Response, ResponseBody, Server, TcpConnection};
use reqqueue_store::QueueStorage;
use std::io::Write;
use std::net::{SocketAddr, TcpStream};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tempfile::TempDir;

/// Start a server on a free port that serves `connections` connections
fn spawn_server(path: PathBuf, connections: usize) -> (SocketAddr, thread::JoinHandle<()>) {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let storage = QueueStorage::<EmploymentRequest>::open(path).unwrap();
        let runner = CommandRunner::new(EmploymentRequestCommands::new(storage), Default::default());
        let mut server = Server::bind("127.0.0.1:0", runner).unwrap();
        tx.send(server.local_addr().unwrap()).unwrap();
        for _ in 0..connections {
            server.serve_one().unwrap();
        }
    });
    (rx.recv().unwrap(), handle)
}

#[test]
fn test_session_over_tcp() {
    let dir = TempDir::new().unwrap();
    let (addr, server) = spawn_server(dir.path().join("queue.json"), 1);

    {
        let mut runner = RemoteRunner::connect(TcpConnection::connect(addr).unwrap()).unwrap();

        assert_eq!(runner.descriptors().len(), 14);
        let status = runner.eval(r#"add {"applicant": "tcp"}"#);
        assert!(matches!(status, CommandStatus::Success(_)));
        assert_eq!(
            runner.eval("save"),
            CommandStatus::Success("The queue has been saved".to_string())
        );
    }

    server.join().unwrap();
    let saved = std::fs::read_to_string(dir.path().join("queue.json")).unwrap();
    assert!(saved.contains("\"tcp\""));
}

#[test]
fn test_queue_survives_across_connections() {
    let dir = TempDir::new().unwrap();
    let (addr, server) = spawn_server(dir.path().join("queue.json"), 2);

    {
        let mut first = RemoteRunner::connect(TcpConnection::connect(addr).unwrap()).unwrap();
        first.eval(r#"add {"applicant": "kept"}"#);
    }
    {
        let mut second = RemoteRunner::connect(TcpConnection::connect(addr).unwrap()).unwrap();
        assert!(second.eval("info").message().contains("1. kept (Pending"));
    }

    server.join().unwrap();
}

#[test]
fn test_malformed_request_gets_failure_response() {
    let dir = TempDir::new().unwrap();
    let (addr, server) = spawn_server(dir.path().join("queue.json"), 1);

    {
        let mut stream = TcpStream::connect(addr).unwrap();
        frame::write_frame(&mut stream, b"{\"request\": \"shutdown\"}").unwrap();
        let response: Response = frame::receive(&mut stream).unwrap().unwrap();
        assert!(matches!(response.body, ResponseBody::Failure { .. }));

        frame::write_frame(
            &mut stream,
            b"{\"request_id\": \"req-7\", \"request\": \"shutdown\"}",
        )
        .unwrap();
        let response: Response = frame::receive(&mut stream).unwrap().unwrap();
        assert_eq!(response.request_id.as_str(), "req-7");
        assert!(matches!(
            &response.body,
            ResponseBody::Failure { message } if message.starts_with("malformed request")
        ));
        stream.flush().unwrap();
    }

    server.join().unwrap();
}

#[test]
fn test_broken_connection_does_not_stop_server() {
    let dir = TempDir::new().unwrap();
    let (addr, server) = spawn_server(dir.path().join("queue.json"), 2);

    {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(&[0, 0, 0, 0]).unwrap();
    }
    {
        let runner = RemoteRunner::connect(TcpConnection::connect(addr).unwrap()).unwrap();
        assert_eq!(runner.commands().len(), 14);
    }

    server.join().unwrap();
}

#[test]
fn test_connect_to_closed_port_fails() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    assert!(TcpConnection::connect(addr).is_err());
}

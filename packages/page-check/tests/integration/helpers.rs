//! Test browsers and a static page server.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::{Bytes, Incoming as IncomingBody};
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use page_check::{BoxError, Browser, BrowserSession};

/// Page body listing `Test Name 0` .. `Test Name 9` separated by spaces.
pub fn all_contacts_body() -> String {
    (0..10)
        .map(|i| format!("Test Name {}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serves `html` for every request on an ephemeral local port.
pub async fn serve_static(html: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let html = Bytes::from(html);

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let io = TokioIo::new(stream);
            let html = html.clone();

            tokio::spawn(async move {
                let service = hyper::service::service_fn(move |_req: Request<IncomingBody>| {
                    let html = html.clone();
                    async move { Ok::<_, Infallible>(Response::new(Full::new(html))) }
                });
                if let Err(err) = hyper::server::conn::http1::Builder::new()
                    .serve_connection(io, service)
                    .await
                {
                    eprintln!("Error serving connection: {}", err);
                }
            });
        }
    });

    addr
}

/// Shared log of calls made against a [`ScriptedBrowser`].
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Browser whose behaviour is fixed up front, recording every call.
#[derive(Default)]
pub struct ScriptedBrowser {
    pub page: String,
    pub fail_launch: bool,
    pub fail_goto: bool,
    pub fail_page_source: bool,
    pub fail_quit: bool,
    pub calls: CallLog,
}

impl ScriptedBrowser {
    pub fn serving(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub struct ScriptedSession {
    page: String,
    fail_goto: bool,
    fail_page_source: bool,
    fail_quit: bool,
    calls: CallLog,
}

impl ScriptedSession {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl Browser for ScriptedBrowser {
    type Session = ScriptedSession;

    async fn launch(&self, args: &[String]) -> Result<ScriptedSession, BoxError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("launch {}", args.join(" ")));
        if self.fail_launch {
            return Err("geckodriver not found".into());
        }
        Ok(ScriptedSession {
            page: self.page.clone(),
            fail_goto: self.fail_goto,
            fail_page_source: self.fail_page_source,
            fail_quit: self.fail_quit,
            calls: self.calls.clone(),
        })
    }
}

#[async_trait]
impl BrowserSession for ScriptedSession {
    async fn goto(&mut self, url: &str) -> Result<(), BoxError> {
        self.record(format!("goto {}", url));
        if self.fail_goto {
            return Err("connection refused".into());
        }
        Ok(())
    }

    async fn page_source(&mut self) -> Result<String, BoxError> {
        self.record("page_source");
        if self.fail_page_source {
            return Err("no such window".into());
        }
        Ok(self.page.clone())
    }

    async fn quit(self) -> Result<(), BoxError> {
        self.record("quit");
        if self.fail_quit {
            return Err("session already gone".into());
        }
        Ok(())
    }
}

/// Browser that fetches raw HTML over HTTP without rendering it.
pub struct HttpBrowser;

pub struct HttpSession {
    page: Option<String>,
}

#[async_trait]
impl Browser for HttpBrowser {
    type Session = HttpSession;

    async fn launch(&self, _args: &[String]) -> Result<HttpSession, BoxError> {
        Ok(HttpSession { page: None })
    }
}

#[async_trait]
impl BrowserSession for HttpSession {
    async fn goto(&mut self, url: &str) -> Result<(), BoxError> {
        self.page = Some(fetch(url).await?);
        Ok(())
    }

    async fn page_source(&mut self) -> Result<String, BoxError> {
        self.page.clone().ok_or_else(|| "no page loaded".into())
    }

    async fn quit(self) -> Result<(), BoxError> {
        Ok(())
    }
}

async fn fetch(url: &str) -> Result<String, BoxError> {
    let uri: hyper::Uri = url.parse()?;
    let host = uri.host().ok_or("missing host")?.to_string();
    let port = uri.port_u16().unwrap_or(80);

    let stream = TcpStream::connect((host.as_str(), port)).await?;
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream)).await?;
    tokio::spawn(async move {
        if let Err(err) = conn.await {
            eprintln!("Connection failed: {}", err);
        }
    });

    let req = Request::builder()
        .uri(uri.path())
        .header(hyper::header::HOST, host)
        .body(Empty::<Bytes>::new())?;
    let res = sender.send_request(req).await?;
    let body = res.into_body().collect().await?.to_bytes();
    Ok(String::from_utf8(body.to_vec())?)
}

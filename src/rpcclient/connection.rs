//! Client connection.
//! Contains the HTTP transport configuration for the client.

use crate::ethjson::JsonResponse;

use super::infrastructure::Command;

use {
    super::error::RpcClientError,
    async_trait::async_trait,
    log::{info, warn},
    tokio::sync::mpsc,
};

/// A pluggable transport for the client.  Implementations read serialized
/// commands off a channel, deliver them to a server and forward each
/// decoded response through the command's own channel.
#[async_trait]
pub trait RpcTransport: Sized + Send + Sync + Clone {
    /// Serves commands received from user_command until the channel is
    /// closed.  Delivery failures are forwarded to the waiting caller
    /// through the command channel, not returned from here.
    async fn handle_commands(
        &self,
        user_command: mpsc::Receiver<Command>,
    ) -> Result<(), RpcClientError>;

    /// Endpoint requests are delivered to.
    fn url(&self) -> String;
}

/// Describes the connection configuration parameters for the client.
#[derive(Debug, Clone)]
pub struct ConnConfig {
    /// Host and port of the RPC server.
    pub host: String,

    /// Username to authenticate to the RPC server.  Basic auth headers
    /// are only sent when a username is set.
    pub user: String,

    /// Password to authenticate to the RPC server.
    pub password: String,

    /// Strings for a PEM-encoded certificate to trust in addition to the
    /// system store.  It has no effect if the disable_tls parameter
    /// is true.
    pub certificates: String,

    /// Full proxy url containing `scheme`, `host` and `port` if specified.
    pub proxy_host: Option<String>,

    /// Username to connect to proxy.
    pub proxy_username: String,

    /// Password to connect to proxy.
    pub proxy_password: String,

    /// Specifies whether transport layer security should be disabled.
    /// Local nodes commonly serve plain HTTP, but for a remote endpoint
    /// TLS should be kept on as otherwise your credentials are sent
    /// across the wire in cleartext.
    pub disable_tls: bool,

    /// Trust server certificates that fail verification.  Needed for
    /// nodes serving self-signed certificates.
    pub accept_invalid_certs: bool,
}

impl Default for ConnConfig {
    fn default() -> Self {
        ConnConfig {
            host: "127.0.0.1:8545".to_string(),
            user: String::new(),
            password: String::new(),
            certificates: String::new(),
            proxy_host: None,
            proxy_username: String::new(),
            proxy_password: String::new(),
            disable_tls: true,
            accept_invalid_certs: false,
        }
    }
}

#[async_trait]
impl RpcTransport for ConnConfig {
    async fn handle_commands(
        &self,
        mut user_command: mpsc::Receiver<Command>,
    ) -> Result<(), RpcClientError> {
        let client = self.create_http_client()?;
        let url = self.url();

        let on_error =
            |err: String, response: JsonResponse, channel: mpsc::Sender<JsonResponse>| async move {
                if let Err(e) = channel.send(response).await {
                    warn!(
                        "({}) Receiving channel closed abruptly on sending error message, error: {}",
                        err, e
                    );
                }
            };

        while let Some(cmd) = user_command.recv().await {
            // Server response.
            let mut json_response = JsonResponse::default();

            let mut request_builder = client.post(&url).body(cmd.rpc_message);

            if !self.user.is_empty() {
                request_builder = request_builder.basic_auth(&self.user, Some(&self.password));
            }

            let request = match request_builder.build() {
                Ok(e) => e,

                Err(e) => {
                    warn!("Error creating HTTP Post request, error: {}", e);

                    // On error, errors are logged and channel is closed.
                    json_response.error =
                        serde_json::Value::String("Error creating HTTP Post request".to_string());

                    on_error(
                        "HTTP request handshake".to_string(),
                        json_response,
                        cmd.user_channel,
                    )
                    .await;
                    continue;
                }
            };

            let response = match client.execute(request).await {
                Ok(e) => e.bytes().await,

                Err(e) => {
                    warn!("Error sending RPC message to server, error: {}", e);
                    json_response.error = serde_json::Value::String(format!(
                        "Error sending http request, error: {}",
                        e
                    ));

                    on_error(
                        "HTTP request execute".to_string(),
                        json_response,
                        cmd.user_channel,
                    )
                    .await;

                    continue;
                }
            };

            let bytes = match response {
                Ok(e) => e,

                Err(e) => {
                    warn!("Error retrieving HTTP server response, error: {}", e);
                    on_error("HTTP response".to_string(), json_response, cmd.user_channel).await;

                    continue;
                }
            };

            // Marshal server result to a json response.
            json_response = match serde_json::from_slice(&bytes) {
                Ok(m) => m,

                Err(e) => {
                    warn!(
                        "Error unmarshalling binary result, error: {}. \n Message: {:?}",
                        e,
                        std::str::from_utf8(&bytes)
                    );

                    continue;
                }
            };

            let channel = cmd.user_channel;

            if let Err(e) = channel.send(json_response).await {
                warn!(
                    "Receiving request channel closed abruptly on HTTP post mode, error: {}",
                    e
                )
            }
        }

        Ok(())
    }

    fn url(&self) -> String {
        let scheme = if self.disable_tls { "http" } else { "https" };

        format!("{}://{}", scheme, self.host)
    }
}

impl ConnConfig {
    fn create_http_client(&self) -> Result<reqwest::Client, RpcClientError> {
        let proxy = match self.proxy_host.clone() {
            Some(proxy) => {
                let proxy = reqwest::Proxy::all(proxy);

                let proxy = match proxy {
                    Ok(e) => e,

                    Err(e) => {
                        warn!("Error setting up RPC proxy connection, error: {}", e);
                        return Err(RpcClientError::ProxyConnection);
                    }
                };

                let proxy = if !self.proxy_password.is_empty() || !self.proxy_username.is_empty() {
                    proxy.basic_auth(&self.proxy_username, &self.proxy_password)
                } else {
                    proxy
                };

                Some(proxy)
            }

            None => None,
        };

        let mut request_builder = reqwest::Client::builder();
        request_builder = match proxy {
            Some(e) => request_builder.proxy(e),

            None => request_builder,
        };

        if !self.certificates.is_empty() {
            request_builder = match reqwest::Certificate::from_pem(self.certificates.as_bytes()) {
                Ok(certificate) => request_builder.add_root_certificate(certificate),

                Err(e) => {
                    warn!("Error parsing tls certificate, error: {}", e);
                    return Err(RpcClientError::HttpTlsCertificate(e));
                }
            };
        }

        if self.accept_invalid_certs {
            request_builder = request_builder.danger_accept_invalid_certs(true);
        }

        let mut headers = reqwest::header::HeaderMap::new();

        let header_value = match reqwest::header::HeaderValue::from_str("application/json") {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to set header content type on HTTP client, error: {}",
                    e
                );
                return Err(RpcClientError::HttpHeader(e));
            }
        };

        headers.append(reqwest::header::CONTENT_TYPE, header_value);

        let request_builder = request_builder.default_headers(headers);

        match request_builder.build() {
            Ok(e) => {
                info!("Successful HTTP handshake");
                Ok(e)
            }

            Err(e) => {
                info!("Error building HTTP handshake, error: {}", e);
                Err(RpcClientError::HttpHandshake(e))
            }
        }
    }
}

use super::template::fallback_script;
use super::transport::{CodegenTransport, GenerateRequest, HttpTransport};
use crate::params::ParameterMap;
use std::thread::{self, JoinHandle};

/// Turns a parameter map into source text.
///
/// Tries the remote service once and falls back to the local scaffold on
/// any failure. Generation never fails from the caller's point of view.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator<T = HttpTransport> {
    transport: T,
}

impl<T: CodegenTransport> CodeGenerator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn generate(&self, parameters: &ParameterMap) -> String {
        let parameters = parameters.to_json();
        let fallback = fallback_script(&parameters);

        let request = GenerateRequest { parameters };
        match self.transport.request(&request) {
            Ok(response) => match response.code {
                Some(code) if !code.is_empty() => {
                    log::info!("Received {} bytes of generated code", code.len());
                    code
                }
                _ => {
                    log::debug!("Code generation reply carried no code, using local template");
                    fallback
                }
            },
            Err(e) => {
                log::warn!("Code generation failed, using local template: {}", e);
                fallback
            }
        }
    }
}

impl<T> CodeGenerator<T>
where
    T: CodegenTransport + Clone + Send + 'static,
{
    /// Runs `generate` on a background thread so the caller stays responsive.
    ///
    /// There is no cancellation; if several are in flight, whichever result
    /// the caller applies last wins.
    pub fn spawn(&self, parameters: ParameterMap) -> JoinHandle<String> {
        let generator = self.clone();
        thread::spawn(move || generator.generate(&parameters))
    }
}

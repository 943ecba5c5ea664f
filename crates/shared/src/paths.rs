//! REST endpoint paths exposed by the portal server
//!
//! Paths are relative to the server origin. Identifiers are inserted as-is;
//! proposal ids and tokens are opaque server-issued strings.

/// Statistics endpoint for the director dashboard
pub const STATISTICS: &str = "/api/propuestas/estadisticas";

/// Client list endpoint
pub const CLIENTS: &str = "/api/clientes";

/// `POST /propuestas/{id}/enviar` - send (or resend) a proposal to its client
pub fn send_proposal(proposal_id: &str) -> String {
    format!("/propuestas/{}/enviar", proposal_id)
}

/// `POST /propuestas/{id}/modificar` - change the margin of a proposal
pub fn modify_proposal(proposal_id: &str) -> String {
    format!("/propuestas/{}/modificar", proposal_id)
}

/// `GET /propuestas/{id}` - director proposal page
pub fn proposal_page(proposal_id: &str) -> String {
    format!("/propuestas/{}", proposal_id)
}

/// `GET /cliente/propuesta/{token}` - client portal page
pub fn client_portal_page(token: &str) -> String {
    format!("/cliente/propuesta/{}", token)
}

/// `POST /cliente/respuesta/{token}` - record the client's decision
pub fn client_response(token: &str) -> String {
    format!("/cliente/respuesta/{}", token)
}

/// `POST /cliente/firmar/{token}/{documento_id}` - sign a contract document
pub fn sign_contract(token: &str, document_id: &str) -> String {
    format!("/cliente/firmar/{}/{}", token, document_id)
}

/// `GET /cliente/documentos/{token}` - documents generated for a proposal
pub fn client_documents(token: &str) -> String {
    format!("/cliente/documentos/{}", token)
}

/// Extract the response token from a page path.
///
/// The token is the final path segment, exactly as the portal page addresses
/// it (`/cliente/propuesta/abc123` yields `abc123`). A trailing slash yields
/// an empty token, mirroring a plain split on `/`.
pub fn token_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_proposal_paths() {
        assert_eq!(send_proposal("p-1"), "/propuestas/p-1/enviar");
        assert_eq!(modify_proposal("p-1"), "/propuestas/p-1/modificar");
    }

    #[test]
    fn builds_client_paths() {
        assert_eq!(client_response("tok"), "/cliente/respuesta/tok");
        assert_eq!(sign_contract("tok", "doc"), "/cliente/firmar/tok/doc");
        assert_eq!(client_documents("tok"), "/cliente/documentos/tok");
    }

    #[test]
    fn token_is_last_path_segment() {
        assert_eq!(token_from_path("/cliente/propuesta/abc123"), "abc123");
        assert_eq!(token_from_path("abc123"), "abc123");
        assert_eq!(token_from_path("/cliente/propuesta/"), "");
        assert_eq!(token_from_path(""), "");
    }
}

//! Report Service - read-only dashboard data

use mgcp_shared::{paths, ClientSummary, ProposalStatistics};

use crate::application::{Api, ServiceError};

#[derive(Clone)]
pub struct ReportService {
    api: Api,
}

impl ReportService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Proposal counters per status
    pub async fn statistics(&self) -> Result<ProposalStatistics, ServiceError> {
        Ok(self.api.get(paths::STATISTICS).await?)
    }

    /// Registered clients
    pub async fn clients(&self) -> Result<Vec<ClientSummary>, ServiceError> {
        Ok(self.api.get(paths::CLIENTS).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::RecordingApi;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn fetches_statistics() {
        let api = RecordingApi::new();
        api.respond(
            "/api/propuestas/estadisticas",
            json!({
                "total": 10, "pregeneradas": 2, "enviadas": 3, "aceptadas": 3,
                "rechazadas": 1, "revision": 1, "contratos_firmados": 2,
            }),
        );
        let svc = ReportService::new(Api::new(Arc::new(api.clone())));

        let stats = svc.statistics().await.unwrap();

        assert_eq!(stats.total, 10);
        assert_eq!(stats.contratos_firmados, 2);
    }

    #[tokio::test]
    async fn fetches_clients() {
        let api = RecordingApi::new();
        api.respond(
            "/api/clientes",
            json!([{ "id": "c1", "nombre": "Retail SpA", "email": "compras@retail.cl", "telefono": null }]),
        );
        let svc = ReportService::new(Api::new(Arc::new(api.clone())));

        let clients = svc.clients().await.unwrap();

        assert_eq!(clients[0].name, "Retail SpA");
        assert_eq!(clients[0].phone, None);
    }
}

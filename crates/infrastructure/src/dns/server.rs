use crate::dns::record_mapper::RecordMapper;
use hickory_proto::op::{Header, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use ipdns_application::services::ZoneCatalog;
use ipdns_domain::{Answer, Query};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// hickory request handler answering from a [`ZoneCatalog`].
#[derive(Clone)]
pub struct ZoneRequestHandler {
    catalog: Arc<ZoneCatalog>,
}

impl ZoneRequestHandler {
    pub fn new(catalog: Arc<ZoneCatalog>) -> Self {
        Self { catalog }
    }

    fn decode(request: &Request) -> Query {
        let questions = request
            .queries()
            .iter()
            .map(|query| RecordMapper::to_question(query.original()))
            .collect();

        Query::new(request.id(), questions).with_remote(request.src())
    }

    fn answer(&self, request: &Request) -> Answer {
        let query = Self::decode(request);

        if request.header().op_code() != OpCode::Query {
            warn!(
                id = %format!("{:04x}", query.id),
                op_code = ?request.header().op_code(),
                "unsupported opcode"
            );
            return Answer::empty(query.id, ipdns_domain::ResponseCode::NotImp);
        }

        self.catalog.answer(&query)
    }
}

#[async_trait::async_trait]
impl RequestHandler for ZoneRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let answer = self.answer(request);
        let id = format!("{:04x}", answer.id);

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);

        let answers: Vec<Record> = match RecordMapper::to_records(&answer.records) {
            Ok(records) => {
                header.set_response_code(RecordMapper::to_response_code(answer.response_code));
                records
            }
            Err(e) => {
                error!(id = %id, error = %e, "failed to encode answer records");
                header.set_response_code(ResponseCode::ServFail);
                Vec::new()
            }
        };

        debug!(
            id = %id,
            code = %answer.response_code,
            answers = answers.len(),
            "sending response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(id = %id, error = %e, "failed to send response");
                ResponseInfo::from(header)
            }
        }
    }
}

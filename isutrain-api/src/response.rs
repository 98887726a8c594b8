use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use isutrain_core::{Body, Reply, Status};

pub struct ApiReply(pub Reply);

impl From<Reply> for ApiReply {
    fn from(reply: Reply) -> Self {
        Self(reply)
    }
}

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        let Reply { status, body } = self.0;
        let code = match status {
            Status::Ok => StatusCode::OK,
            Status::Accepted => StatusCode::ACCEPTED,
            Status::NoContent => StatusCode::NO_CONTENT,
        };

        match body {
            Body::Ack => (code, status.reason()).into_response(),
            Body::Json(bytes) => {
                (code, [(header::CONTENT_TYPE, "application/json")], bytes).into_response()
            }
            Body::Empty => code.into_response(),
        }
    }
}

use std::sync::Arc;

use lambda_runtime::{LambdaEvent, service_fn};
use tracing::Instrument;
use voxdrop_telemetry::TelemetryGuard;

use crate::{Handler, event::ProxyEvent, response::ProxyResponse};

/// Run the Lambda runtime loop until the runtime API goes away
///
/// Every invocation gets its own span tagged with the Lambda request id
/// and, once the request is validated, the object key.
/// Telemetry is flushed after each event because the execution
/// environment may be frozen right after the response is sent.
pub async fn run(handler: Arc<Handler>, telemetry: Arc<TelemetryGuard>) -> anyhow::Result<()> {
    tracing::info!("starting lambda runtime");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyEvent>| {
        let handler = Arc::clone(&handler);
        let telemetry = Arc::clone(&telemetry);

        async move {
            let LambdaEvent { payload, context } = event;
            let span = tracing::info_span!(
                "invocation",
                request_id = %context.request_id,
                key = tracing::field::Empty
            );

            let response: ProxyResponse = handler.handle_event(&payload).instrument(span).await;

            if let Err(e) = telemetry.force_flush() {
                tracing::warn!("failed to flush telemetry: {e}");
            }

            Ok::<_, lambda_runtime::Error>(response)
        }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("lambda runtime failed: {e}"))
}

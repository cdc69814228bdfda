//! The responder: classify, populate, encode, emit

use bytes::Bytes;
use respondkit_core::{
    Annotation, CoderLookup, ERROR_KEY, Outcome, RESPONSE_BODY_KEY, ResponderConfig,
    ResponseContext, ServiceCode, StatusClass, TransportStatus, WARN_KEY,
};
use respondkit_transport::{Codec, CodecError, EnvelopePool, JsonCodec, PooledEnvelope};
use serde::Serialize;
use std::sync::Arc;

/// Converts `(service code, outcome)` pairs into written responses
///
/// One responder is built at startup and shared by reference (or `Arc`)
/// across every request-handling thread. It owns the envelope pool, so no
/// process-wide state is involved.
///
/// # Service code contract
///
/// The `service_code` argument always selects the transport status
/// (`service_code / 1000`) and therefore the disclosure policy. On the
/// success path it is also the `code` in the body. On the failure path the
/// body's `code` and `msg` come from the [`CoderLookup`] instead; the
/// argument only picks the status class. This lets handlers choose the
/// transport status while the error registry owns the precise code.
pub struct Responder<L> {
    lookup: L,
    pool: EnvelopePool,
    codec: JsonCodec,
    success_message: String,
}

impl<L> Responder<L> {
    /// Create a responder with the default configuration
    pub fn new(lookup: L) -> Self {
        Self::with_config(lookup, &ResponderConfig::default())
    }

    /// Create a responder from configuration
    pub fn with_config(lookup: L, config: &ResponderConfig) -> Self {
        let codec = if config.pretty {
            JsonCodec::pretty()
        } else {
            JsonCodec::new()
        };
        Self {
            lookup,
            pool: EnvelopePool::new(config.max_idle_envelopes),
            codec,
            success_message: config.success_message.clone(),
        }
    }

    /// The coder lookup consulted on failures
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// The envelope pool shared by every call
    pub fn pool(&self) -> &EnvelopePool {
        &self.pool
    }

    /// Body encoder, compact or pretty per the configuration
    pub fn codec(&self) -> &JsonCodec {
        &self.codec
    }

    /// Respond with an explicit outcome
    ///
    /// See the [type-level docs](Responder) for how `service_code` and the
    /// lookup's code interact on failures.
    pub fn respond<C, T, E>(&self, ctx: &mut C, service_code: ServiceCode, outcome: Outcome<T, E>)
    where
        C: ResponseContext + ?Sized,
        T: Serialize,
        E: std::error::Error + Send + Sync + 'static,
        L: CoderLookup<E>,
    {
        match outcome {
            Outcome::Success(payload) => self.respond_ok(ctx, service_code, payload),
            Outcome::Failure(err) => self.respond_err(ctx, service_code, err),
        }
    }

    /// Respond from a `Result`, treating `Err` as the failure outcome
    pub fn respond_result<C, T, E>(
        &self,
        ctx: &mut C,
        service_code: ServiceCode,
        result: Result<T, E>,
    ) where
        C: ResponseContext + ?Sized,
        T: Serialize,
        E: std::error::Error + Send + Sync + 'static,
        L: CoderLookup<E>,
    {
        self.respond(ctx, service_code, Outcome::from(result));
    }

    /// Respond with a success payload
    ///
    /// A fault-class `service_code` still aborts the context, but with no
    /// error there is nothing to annotate and the payload is sent as is.
    pub fn respond_ok<C, T>(&self, ctx: &mut C, service_code: ServiceCode, payload: T)
    where
        C: ResponseContext + ?Sized,
        T: Serialize,
    {
        let status = service_code.transport_status();
        let mut envelope = self.pool.acquire();

        envelope.code = service_code.get();
        envelope.set_msg(&self.success_message);
        if status.class().is_fault() {
            ctx.abort();
        }

        let body = envelope
            .set_data(&payload)
            .and_then(|()| self.encode(&envelope));
        self.emit(ctx, status, body);
    }

    /// Respond with an error
    ///
    /// The body's `code` and `msg` come from the lookup; `service_code`
    /// only selects the transport status and disclosure policy.
    pub fn respond_err<C, E>(&self, ctx: &mut C, service_code: ServiceCode, err: E)
    where
        C: ResponseContext + ?Sized,
        E: std::error::Error + Send + Sync + 'static,
        L: CoderLookup<E>,
    {
        let status = service_code.transport_status();
        let mut envelope = self.pool.acquire();

        let coder = self.lookup.lookup(&err);
        let text = err.to_string();
        envelope.code = coder.code();
        envelope.set_msg(coder.message_or(&text));

        let filled = match status.class() {
            StatusClass::ClientFault => {
                ctx.abort();
                ctx.set(WARN_KEY, Annotation::Fault(Arc::new(err)));
                envelope.set_data(text.as_str())
            }
            StatusClass::ServerFault => {
                ctx.abort();
                ctx.set(ERROR_KEY, Annotation::Fault(Arc::new(err)));
                Ok(())
            }
            // Success-class code with an error: no abort, the text is the payload
            StatusClass::Success => envelope.set_data(text.as_str()),
        };

        let body = filled.and_then(|()| self.encode(&envelope));
        self.emit(ctx, status, body);
    }

    fn encode(&self, envelope: &PooledEnvelope<'_>) -> Result<Vec<u8>, CodecError> {
        self.codec.encode(&**envelope)
    }

    /// Annotate the body and perform the terminal write
    ///
    /// Encoding failures are logged and an empty body is sent; the response
    /// is still written with the derived status.
    fn emit<C>(&self, ctx: &mut C, status: TransportStatus, body: Result<Vec<u8>, CodecError>)
    where
        C: ResponseContext + ?Sized,
    {
        let body = match body {
            Ok(bytes) => Bytes::from(bytes),
            Err(err) => {
                tracing::warn!(
                    status = status.get(),
                    error = %err,
                    "response body encoding failed"
                );
                Bytes::new()
            }
        };
        ctx.set(RESPONSE_BODY_KEY, Annotation::Body(body.clone()));
        ctx.write_json(status, body);
    }
}

impl<L> std::fmt::Debug for Responder<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("pool", &self.pool)
            .field("codec", &self.codec)
            .field("success_message", &self.success_message)
            .finish_non_exhaustive()
    }
}

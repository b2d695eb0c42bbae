use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

//레이어들을 하나의 subscriber로 묶는다.
//sink를 인자로 받아서 테스트에서는 std::io::sink로 로그를 버릴 수 있다.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink
) -> impl Subscriber + Send + Sync
    where
        Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static
{
    //RUST_LOG가 없으면 인자로 받은 레벨을 사용한다.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

//글로벌 subscriber 등록 (프로세스에서 한 번만 호출)
pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync
) -> Result<(), anyhow::Error> {
    //reqwest 등 'log'를 사용하는 크레이트의 이벤트도 tracing으로 모은다.
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}

//실패 경로는 모두 같은 모양으로 남긴다. 사용자에게는 알리지 않고 로그만 남기는 경우에 사용
pub fn log_failure(operation: &str, e: &(dyn std::error::Error + 'static)) {
    tracing::error!(
        error.cause_chain = ?ErrorChain(e),
        error.message = %e,
        "{} failed",
        operation
    );
}

struct ErrorChain<'a>(&'a (dyn std::error::Error + 'static));

impl std::fmt::Debug for ErrorChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::error_chain_fmt(self.0, f)
    }
}

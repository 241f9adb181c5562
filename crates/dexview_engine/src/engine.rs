use std::sync::{mpsc, Arc};
use std::thread;

use dexview_logging::dex_debug;

use crate::fetch::{ChannelProgressSink, FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, FetchError, PageEntry};

enum EngineCommand {
    FetchPage { offset: u32, limit: u32 },
}

/// Bridge between the synchronous UI loop and the async fetch pipeline.
///
/// Commands go in over a channel; a dedicated thread owns the tokio runtime
/// and spawns one task per page. There is no cancellation: a page in flight
/// at teardown dies with the process.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestPageFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_page(&self, offset: u32, limit: u32) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage { offset, limit });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { offset, limit } => {
            dex_debug!("fetching page offset={} limit={}", offset, limit);
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result: Result<Vec<PageEntry>, FetchError> =
                fetcher.fetch_page(offset, limit, &sink).await;
            let _ = event_tx.send(EngineEvent::PageCompleted { offset, result });
        }
    }
}

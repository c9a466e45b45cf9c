#[derive(Debug, Clone, PartialEq)]
pub enum TrainEvent {
    Epoch { pct: f64, loss: f64 },
    Done(Result<(), String>),
}

pub trait TrainEventSink {
    fn on_train_event(&mut self, ev: &TrainEvent);
}

/// Prints one status line per epoch, the caller-facing progress stream.
/// Failures are not printed here; the error propagates out of `train` and
/// the caller owns terminal error reporting.
#[derive(Debug, Default)]
pub struct PrintSink;

impl TrainEventSink for PrintSink {
    fn on_train_event(&mut self, ev: &TrainEvent) {
        match ev {
            TrainEvent::Epoch { pct, loss } => {
                println!("Progress:{pct:.2}%, Loss:{loss:.6}");
            },
            TrainEvent::Done(_) => {},
        }
    }
}

/// Swallows all events, for callers that opt out of progress output.
#[derive(Debug, Default)]
pub struct NullSink;

impl TrainEventSink for NullSink {
    fn on_train_event(&mut self, _ev: &TrainEvent) {}
}

#[cfg(test)]
pub(crate) struct RecordSink {
    pub events: Vec<TrainEvent>,
}

#[cfg(test)]
impl RecordSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

#[cfg(test)]
impl TrainEventSink for RecordSink {
    fn on_train_event(&mut self, ev: &TrainEvent) {
        self.events.push(ev.clone());
    }
}

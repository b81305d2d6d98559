#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    thread,
};

use countdown_label::{
    timer::Color,
    ui::{DisplaySink, Dispatcher, UiJob},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Text(String),
    Color(Color),
}

/// Sink that remembers every write and the thread it came from
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<Event>>>,
    threads: Arc<Mutex<Vec<Option<String>>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Writes paired up as (text, color), in order
    pub fn frames(&self) -> Vec<(String, Color)> {
        let events = self.events();
        events
            .chunks(2)
            .map(|pair| match pair {
                [Event::Text(text), Event::Color(color)] => (text.clone(), *color),
                other => panic!("unpaired writes: {:?}", other),
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.frames().into_iter().map(|(text, _)| text).collect()
    }

    pub fn threads(&self) -> Vec<Option<String>> {
        self.threads.lock().unwrap().clone()
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
        self.threads
            .lock()
            .unwrap()
            .push(thread::current().name().map(str::to_string));
    }
}

impl DisplaySink for RecordingSink {
    fn set_text(&mut self, text: &str) {
        self.record(Event::Text(text.to_string()));
    }

    fn set_text_color(&mut self, color: Color) {
        self.record(Event::Color(color));
    }
}

/// Dispatcher that holds jobs until the test flushes them, standing in for
/// a busy UI thread
#[derive(Default)]
pub struct ManualDispatcher {
    queue: Mutex<Vec<UiJob>>,
}

impl ManualDispatcher {
    pub fn pending(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    pub fn flush(&self) {
        let jobs: Vec<UiJob> = std::mem::take(&mut *self.queue.lock().unwrap());
        for job in jobs {
            job();
        }
    }
}

impl Dispatcher for ManualDispatcher {
    fn post(&self, job: UiJob) {
        self.queue.lock().unwrap().push(job);
    }
}

/// Expected text for a countdown value
pub fn clock(timer: u32) -> String {
    format!("{}:{:02}", timer / 60, timer % 60)
}

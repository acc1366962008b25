use crate::config::Config;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::startup::Services;
use crate::waste_classifier::core::{init, transition, Model, Msg};
use std::collections::VecDeque;
use std::sync::Arc;

/// One interactive session: its own model and history, sharing the
/// process-wide classifier.
pub struct WasteClassifier {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub labels: Arc<[String]>,
    model: Model,
}

impl WasteClassifier {
    pub fn new(config: Config, logger: Arc<dyn Logger + Send + Sync>, services: Services) -> Self {
        let logger = logger.with_namespace("session");
        let (model, effects) = init(services.warnings);
        let mut session = Self {
            config,
            logger,
            image_classifier: services.classifier,
            labels: services.labels,
            model,
        };
        let pending: VecDeque<Msg> = effects
            .into_iter()
            .map(|effect| session.execute_effect(effect))
            .collect();
        session.process(pending);
        session
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Handles one interaction to completion, including every effect it
    /// triggers, before returning.
    pub fn send(&mut self, msg: Msg) {
        self.process(VecDeque::from([msg]));
    }

    fn process(&mut self, mut queue: VecDeque<Msg>) {
        while let Some(msg) = queue.pop_front() {
            let _ = self.logger.info(&format!("msg: {}", msg.to_display_string()));

            let (new_model, effects) = transition(std::mem::take(&mut self.model), msg);
            self.model = new_model;

            for effect in effects {
                queue.push_back(self.execute_effect(effect));
            }
        }
    }
}

use std::time::Duration;

use progress_mvu::{
    AppController, AppState, Config, GoalType, Locale, ManualScheduler, ProgressLogic,
    ProgressModel, Snapshot, TestRenderer, Translator, ValueFormatter,
};

pub(crate) struct IntegrationTest {
    pub(crate) controller: AppController<TestRenderer, ManualScheduler>,
    pub(crate) renders: TestRenderer,
    pub(crate) clock: ManualScheduler,
}

impl IntegrationTest {
    /// Move virtual time forward and process whatever expired.
    pub(crate) fn advance_ms(&mut self, ms: u64) -> usize {
        self.clock.advance(Duration::from_millis(ms));
        self.controller.process_queued()
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    pub(crate) fn current(&self) -> f64 {
        self.controller.state().progress.current()
    }
}

pub(crate) struct IntegrationTestBuilder {
    config: Config,
    restored: Option<(f64, f64, GoalType)>,
    logic: ProgressLogic,
    started: bool,
    revealed: bool,
}

pub(crate) fn build_integration_test() -> IntegrationTestBuilder {
    IntegrationTestBuilder {
        config: Config::default(),
        restored: None,
        logic: ProgressLogic::default(),
        started: true,
        revealed: false,
    }
}

impl IntegrationTestBuilder {
    pub(crate) fn given_config(mut self, config: Config) -> Self {
        self.logic = ProgressLogic::new(config.animation);
        self.config = config;
        self
    }

    pub(crate) fn given_goal(mut self, goal: f64) -> Self {
        self.config.goal = goal;
        self
    }

    pub(crate) fn given_goal_type(mut self, goal_type: GoalType) -> Self {
        self.config.goal_type = goal_type;
        self
    }

    pub(crate) fn given_locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Start from existing progress instead of zero.
    pub(crate) fn given_progress(mut self, goal: f64, current: f64, goal_type: GoalType) -> Self {
        self.restored = Some((goal, current, goal_type));
        self
    }

    pub(crate) fn given_formatter(mut self, formatter: impl ValueFormatter + Send + 'static) -> Self {
        self.logic = self.logic.with_formatter(formatter);
        self
    }

    pub(crate) fn given_translator(mut self, translator: impl Translator + Send + 'static) -> Self {
        self.logic = self.logic.with_translator(translator);
        self
    }

    pub(crate) fn given_not_started(mut self) -> Self {
        self.started = false;
        self
    }

    /// Run past the entry delay before handing the test over.
    pub(crate) fn given_entry_revealed(mut self) -> Self {
        self.revealed = true;
        self
    }

    pub(crate) fn build(self) -> IntegrationTest {
        let renderer = TestRenderer::new();
        let clock = ManualScheduler::new();

        let state = match self.restored {
            Some((goal, current, goal_type)) => AppState::with_progress(
                ProgressModel::restore(goal, current, goal_type),
                self.config.locale,
            ),
            None => AppState::from_config(&self.config),
        };
        let entry_delay = self.config.animation.entry_delay_ms;
        let controller =
            AppController::with_state(self.logic, state, renderer.clone(), clock.clone());

        let mut test = IntegrationTest {
            controller,
            renders: renderer,
            clock,
        };
        if self.started {
            test.controller.start();
        }
        if self.revealed {
            test.advance_ms(entry_delay);
        }
        test
    }
}

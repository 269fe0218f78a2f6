//! Subcommand handlers. Each one builds the service it needs from the shared
//! store handles.

use std::{future::pending, sync::Arc, time::Duration};

use anyhow::Result;
use burnboard_app::{
  AppConfig,
  auth::{AuthService, Registration},
  calories::CalorieCounter,
  dashboard::DashboardSummary,
  steps::StepCounter,
  workouts::WorkoutCatalog,
};
use burnboard_core::{
  activity::NewActivity,
  live::Subscription,
  store::{ActivityStore, CalorieStore, StepStore},
  workout::NewWorkout,
};
use burnboard_store_sqlite::SqliteStores;

use crate::{
  ActivityCommand, CaloriesCommand, Cli, Command, StepsCommand, WorkoutCommand,
  output::Printer,
};

pub async fn run(cli: Cli, cfg: &AppConfig, stores: SqliteStores) -> Result<()> {
  let out = Printer::new(cli.json);

  match cli.command {
    Command::Register(args) => {
      let auth = AuthService::new(Arc::new(stores.users));
      let user = auth
        .register(Registration {
          username:         args.username,
          email:            args.email,
          password:         args.password,
          confirm_password: args.confirm_password,
          role:             args.role,
        })
        .await?;
      out.user(&user)
    }

    Command::Login { email, password } => {
      let auth = AuthService::new(Arc::new(stores.users));
      let user = auth.login(&email, &password).await?;
      out.user(&user)
    }

    Command::Steps(StepsCommand::Show) => {
      let latest = stores.steps.latest().await?;
      out.steps(latest.map_or(0, |s| s.step_count))
    }

    Command::Steps(StepsCommand::Run(args)) => {
      let mut counter =
        StepCounter::open(Arc::new(stores.steps), cfg.step_interval()).await?;
      let live = counter.watch();
      counter.start();
      follow(live, args.seconds, |n| out.progress("steps", n)).await;
      let total = counter.stop().await;
      out.steps(total)
    }

    Command::Steps(StepsCommand::Reset) => {
      let mut counter =
        StepCounter::open(Arc::new(stores.steps), cfg.step_interval()).await?;
      counter.reset().await;
      out.steps(counter.count())
    }

    Command::Calories(CaloriesCommand::Run(args)) => {
      let mut counter = CalorieCounter::new(
        Arc::new(stores.calories),
        cfg.calorie_interval(),
        cfg.calorie_increment,
      );
      let live = counter.watch();
      counter.start();
      follow(live, args.seconds, |n| out.progress("kcal", n)).await;
      let session = counter.stop().await;
      out.calorie_session(session.as_ref())
    }

    Command::Calories(CaloriesCommand::History) => {
      let sessions = stores.calories.list().await?;
      out.calorie_history(&sessions)
    }

    Command::Workout(WorkoutCommand::Add { title, instructions, duration, category }) => {
      let catalog = WorkoutCatalog::new(Arc::new(stores.workouts));
      let workout = catalog
        .add(NewWorkout { title, instructions, duration, category })
        .await?;
      out.workout(&workout)
    }

    Command::Workout(WorkoutCommand::List) => {
      let catalog = WorkoutCatalog::new(Arc::new(stores.workouts));
      out.catalog(&catalog.groups().await?)
    }

    Command::Workout(WorkoutCommand::Watch) => {
      let catalog = WorkoutCatalog::new(Arc::new(stores.workouts));
      let mut live = catalog.watch();
      let mut interrupt = std::pin::pin!(tokio::signal::ctrl_c());
      loop {
        tokio::select! {
          _ = &mut interrupt => break,
          groups = live.next() => match groups {
            Some(groups) => out.catalog(&groups)?,
            None => break,
          },
        }
      }
      live.unsubscribe();
      Ok(())
    }

    Command::Activity(ActivityCommand::Add { title, value }) => {
      let activity = stores.activities.insert(NewActivity { title, value }).await?;
      out.activities(std::slice::from_ref(&activity))
    }

    Command::Activity(ActivityCommand::List) => {
      out.activities(&stores.activities.list().await?)
    }

    Command::Dashboard => {
      let summary = DashboardSummary::load(
        &stores.steps,
        &stores.calories,
        &stores.workouts,
        &stores.activities,
      )
      .await?;
      out.dashboard(&summary)
    }
  }
}

/// Report every value from `live` until `seconds` elapse or Ctrl-C.
async fn follow(mut live: Subscription<u32>, seconds: Option<u64>, mut report: impl FnMut(u32)) {
  let deadline = async {
    match seconds {
      Some(s) => tokio::time::sleep(Duration::from_secs(s)).await,
      None => pending::<()>().await,
    }
  };
  let mut deadline = std::pin::pin!(deadline);
  let mut interrupt = std::pin::pin!(tokio::signal::ctrl_c());

  // Skip the value the counter started from.
  live.next().await;

  loop {
    tokio::select! {
      _ = &mut deadline => break,
      _ = &mut interrupt => break,
      value = live.next() => match value {
        Some(n) => report(n),
        None => break,
      },
    }
  }
}

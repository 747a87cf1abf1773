//! Interactive tracking session
//!
//! A small command loop over a [`WorkoutTracker`]. Positions typed by the
//! user are 1-based; the tracker itself is 0-based.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::display::workout::{format_catalog, format_history, format_progress, format_workout};
use crate::error::{BodaiError, BodaiResult};
use crate::export::csv::export_workout_history;
use crate::models::Exercise;
use crate::onboarding::prompt::Prompter;

use super::state::{SetField, WorkoutTracker};

const HELP: &str = "\
Commands:
  date <YYYY-MM-DD|today>              select the workout date
  exercises                            list the exercise catalog
  add <exercise id or name>            add an exercise to the workout
  set <exercise>                       add a set to an exercise
  update <exercise> <set> reps <n>     change the reps of a set
  update <exercise> <set> weight <kg>  change the weight of a set
  done <exercise> <set>                toggle a set complete
  save                                 save the current workout
  show                                 show the current workout
  history                              list saved workouts
  progress <exercise name>             max weight per day
  export <path>                        write saved workouts to CSV
  help                                 show this help
  quit                                 end the session (unsaved work is lost)";

/// A parsed tracker command
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerCommand {
    Date(NaiveDate),
    Catalog,
    AddExercise(String),
    AddSet { exercise: usize },
    UpdateSet { exercise: usize, set: usize, field: SetField },
    ToggleSet { exercise: usize, set: usize },
    Save,
    Show,
    History,
    Progress(String),
    Export(PathBuf),
    Help,
    Quit,
}

fn invalid(message: impl Into<String>) -> BodaiError {
    BodaiError::Validation(message.into())
}

/// Parse a 1-based position into a 0-based index
fn position(arg: Option<&str>, what: &str) -> BodaiResult<usize> {
    arg.and_then(|a| a.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| invalid(format!("Expected a {} number starting at 1", what)))
}

fn parse_date(arg: &str) -> BodaiResult<NaiveDate> {
    if arg.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .map_err(|_| invalid(format!("Invalid date '{}', expected YYYY-MM-DD", arg)))
}

fn parse_field(name: Option<&str>, value: Option<&str>) -> BodaiResult<SetField> {
    let value = value.ok_or_else(|| invalid("Missing value"))?;
    match name.map(str::to_lowercase).as_deref() {
        Some("reps") => value
            .parse::<u32>()
            .map(SetField::Reps)
            .map_err(|_| invalid(format!("Invalid reps '{}'", value))),
        Some("weight") => value
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w >= 0.0)
            .map(SetField::Weight)
            .ok_or_else(|| invalid(format!("Invalid weight '{}'", value))),
        _ => Err(invalid("Expected 'reps' or 'weight'")),
    }
}

impl FromStr for TrackerCommand {
    type Err = BodaiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let rest_required = |what: &str| {
            if rest.is_empty() {
                Err(invalid(format!("Missing {}", what)))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_lowercase().as_str() {
            "date" => Ok(Self::Date(parse_date(&rest_required("date")?)?)),
            "exercises" | "catalog" => Ok(Self::Catalog),
            "add" => Ok(Self::AddExercise(rest_required("exercise")?)),
            "set" => Ok(Self::AddSet {
                exercise: position(args.next(), "exercise")?,
            }),
            "update" => {
                let exercise = position(args.next(), "exercise")?;
                let set = position(args.next(), "set")?;
                let field = parse_field(args.next(), args.next())?;
                Ok(Self::UpdateSet { exercise, set, field })
            }
            "done" => Ok(Self::ToggleSet {
                exercise: position(args.next(), "exercise")?,
                set: position(args.next(), "set")?,
            }),
            "save" => Ok(Self::Save),
            "show" => Ok(Self::Show),
            "history" => Ok(Self::History),
            "progress" => Ok(Self::Progress(rest_required("exercise name")?)),
            "export" => Ok(Self::Export(PathBuf::from(rest_required("path")?))),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err(invalid("Type 'help' for a list of commands")),
            other => Err(invalid(format!(
                "Unknown command '{}'. Type 'help' for a list of commands",
                other
            ))),
        }
    }
}

/// A tracking session: the tracker plus terminal plumbing
#[derive(Debug, Default)]
pub struct TrackerSession {
    tracker: WorkoutTracker,
}

impl TrackerSession {
    /// Start a session with an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying tracker
    pub fn tracker(&self) -> &WorkoutTracker {
        &self.tracker
    }

    /// Read and run commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> BodaiResult<()> {
        prompter.say("BodAI workout tracker. Type 'help' for commands.")?;
        prompter.say("Workouts live in memory for this session only; use 'export' to keep them.")?;

        loop {
            let line = match prompter.ask("track> ") {
                Ok(line) => line,
                // End of input ends the session like `quit`
                Err(BodaiError::Io(_)) => break,
                Err(e) => return Err(e),
            };
            if line.is_empty() {
                continue;
            }

            match line.parse::<TrackerCommand>() {
                Ok(TrackerCommand::Quit) => break,
                Ok(command) => {
                    if let Err(e) = self.execute(command, prompter) {
                        prompter.say(format!("  ! {}", message_of(&e)))?;
                    }
                }
                Err(e) => prompter.say(format!("  ! {}", message_of(&e)))?,
            }
        }

        prompter.say("Goodbye!")
    }

    /// Apply one command, printing its result
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: TrackerCommand,
        prompter: &mut Prompter<R, W>,
    ) -> BodaiResult<()> {
        match command {
            TrackerCommand::Date(date) => {
                let workout = self.tracker.select_date(date);
                prompter.say(format_workout(workout))?;
            }
            TrackerCommand::Catalog => prompter.say(format_catalog())?,
            TrackerCommand::AddExercise(identifier) => {
                let exercise = Exercise::find(&identifier)
                    .ok_or_else(|| invalid(format!("Unknown exercise '{}'", identifier)))?;
                self.require_date()?;
                self.tracker.add_exercise(Some(exercise.id));
                prompter.say(format!("Added {}", exercise.name))?;
            }
            TrackerCommand::AddSet { exercise } => {
                self.require_date()?;
                if !self.tracker.add_set(exercise) {
                    return Err(invalid(format!("No exercise #{}", exercise + 1)));
                }
                self.show(prompter)?;
            }
            TrackerCommand::UpdateSet { exercise, set, field } => {
                self.require_date()?;
                if !self.tracker.update_set(exercise, set, field) {
                    return Err(invalid(format!("No set #{} on exercise #{}", set + 1, exercise + 1)));
                }
                self.show(prompter)?;
            }
            TrackerCommand::ToggleSet { exercise, set } => {
                self.require_date()?;
                if !self.tracker.toggle_set_complete(exercise, set) {
                    return Err(invalid(format!("No set #{} on exercise #{}", set + 1, exercise + 1)));
                }
                self.show(prompter)?;
            }
            TrackerCommand::Save => {
                self.require_date()?;
                self.tracker.save();
                prompter.say("Workout saved.")?;
            }
            TrackerCommand::Show => self.show(prompter)?,
            TrackerCommand::History => prompter.say(format_history(&self.tracker.history()))?,
            TrackerCommand::Progress(name) => {
                let canonical = Exercise::find(&name).map(|e| e.name).unwrap_or(name.as_str());
                let series = self.tracker.progress(canonical);
                prompter.say(format_progress(canonical, &series))?;
            }
            TrackerCommand::Export(path) => {
                let history = self.tracker.history();
                export_workout_history(&history, &path)?;
                prompter.say(format!(
                    "Exported {} workout(s) to {}",
                    history.len(),
                    path.display()
                ))?;
            }
            TrackerCommand::Help => prompter.say(HELP)?,
            TrackerCommand::Quit => {}
        }
        Ok(())
    }

    fn require_date(&self) -> BodaiResult<()> {
        match self.tracker.current() {
            Some(_) => Ok(()),
            None => Err(invalid("Select a date first (e.g. 'date today')")),
        }
    }

    fn show<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> BodaiResult<()> {
        match self.tracker.current() {
            Some(workout) => prompter.say(format_workout(workout)),
            None => prompter.say("No date selected."),
        }
    }
}

/// Validation errors are shown without their "Validation error:" prefix
fn message_of(err: &BodaiError) -> String {
    match err {
        BodaiError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn run_script(script: &str) -> (TrackerSession, String) {
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut session = TrackerSession::new();
        session.run(&mut prompter).unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (session, output)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "date 2024-01-01".parse::<TrackerCommand>().unwrap(),
            TrackerCommand::Date(date("2024-01-01"))
        );
        assert_eq!(
            "add Bench Press".parse::<TrackerCommand>().unwrap(),
            TrackerCommand::AddExercise("Bench Press".into())
        );
        assert_eq!(
            "update 1 2 weight 62.5".parse::<TrackerCommand>().unwrap(),
            TrackerCommand::UpdateSet {
                exercise: 0,
                set: 1,
                field: SetField::Weight(62.5)
            }
        );
        assert_eq!(
            "DONE 2 1".parse::<TrackerCommand>().unwrap(),
            TrackerCommand::ToggleSet { exercise: 1, set: 0 }
        );
        assert_eq!("exit".parse::<TrackerCommand>().unwrap(), TrackerCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        for line in [
            "date yesterday-ish",
            "set 0",
            "update 1 1 reps -3",
            "update 1 1 weight NaN",
            "update 1 1 sets 3",
            "add",
            "dance",
        ] {
            let err = line.parse::<TrackerCommand>().unwrap_err();
            assert!(err.is_validation(), "{} should not parse", line);
        }
    }

    #[test]
    fn test_session_scenario() {
        let script = "\
date 2024-01-01
add Bench Press
set 1
update 1 2 reps 8
update 1 2 weight 60
save
date 2024-01-02
quit
";
        let (session, output) = run_script(script);

        let saved = session.tracker().saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].date, date("2024-01-01"));
        assert_eq!(saved[0].exercises[0].sets.len(), 2);
        assert_eq!(saved[0].exercises[0].sets[1].reps, 8);
        assert_eq!(saved[0].exercises[0].sets[1].weight, 60.0);
        assert_eq!(session.tracker().current().unwrap().date, date("2024-01-02"));
        assert!(output.contains("Workout saved."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let script = "add Bench Press\ndate 2024-01-01\nadd Zumba\nset 4\nsave\n";
        let (session, output) = run_script(script);

        assert!(output.contains("! Select a date first"));
        assert!(output.contains("! Unknown exercise 'Zumba'"));
        assert!(output.contains("! No exercise #4"));
        // End of input ends the session normally
        assert_eq!(session.tracker().saved().len(), 1);
    }

    #[test]
    fn test_export_command() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.csv");
        let script = format!(
            "date 2024-01-01\nadd 7\nupdate 1 1 reps 5\nsave\nexport {}\n",
            path.display()
        );

        let (_session, output) = run_script(&script);

        assert!(output.contains("Exported 1 workout(s)"));
        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.starts_with("date,exercise,set,reps,weight,completed"));
        assert!(csv.contains("2024-01-01,Squats,1,5,0,false"));
    }
}

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use patente_lib::quiz::{select_next, QuizError, QuizRound};
use patente_lib::vocabulary::algorithm::now_millis;
use patente_lib::vocabulary::collection::replace_item;
use patente_lib::vocabulary::CategoryFilter;

use crate::app::App;
use crate::render::terminal::{due_in, paint, streak_dots, Color};

const STREAK_DOTS: u32 = 5;

enum Input {
    Choice(usize),
    Explain,
    Quit,
    Invalid,
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "q" | "quit" => Input::Quit,
        "?" => Input::Explain,
        other => match other.parse::<usize>() {
            Ok(n) if n > 0 => Input::Choice(n - 1),
            _ => Input::Invalid,
        },
    }
}

pub fn run(
    app: &App,
    filter: CategoryFilter,
    rounds: Option<usize>,
    use_color: bool,
) -> Result<()> {
    let mut items = app.store.load_vocabulary().context("Failed to load vocabulary")?;
    let mut stats = app.store.load_stats().context("Failed to load stats")?;
    let mut rng = rand::thread_rng();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answered = 0usize;
    let mut correct = 0usize;

    println!(
        "{} ({}). Type the option number, ? for an explanation, q to quit.",
        paint("Quiz", Color::BOLD, use_color),
        filter
    );

    'rounds: while rounds.map_or(true, |max| answered < max) {
        let prompt = match select_next(&items, filter, now_millis(), &mut rng) {
            Ok(prompt) => prompt,
            Err(e @ QuizError::EmptyPool { .. }) => {
                println!("{}", e);
                break;
            }
            Err(e) => return Err(e.into()),
        };
        let mut round = QuizRound::new(prompt);

        println!();
        println!(
            "{}  {}",
            paint(&round.item().prompt, Color::BOLD, use_color),
            streak_dots(round.item().repetition, STREAK_DOTS, use_color)
        );
        for (i, option) in round.options().iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break 'rounds;
            };
            match parse_input(&line?) {
                Input::Quit => break 'rounds,
                Input::Explain => {
                    let text = app.explain(&round.item().prompt)?;
                    println!("{}", paint(&text, Color::YELLOW, use_color));
                }
                Input::Invalid => {
                    println!("Enter 1-{}, ? or q", round.options().len());
                }
                Input::Choice(index) => match round.answer(index, now_millis()) {
                    Ok(Some(outcome)) => {
                        replace_item(&mut items, outcome.updated.clone());
                        stats.record_attempt(outcome.correct);
                        stats.refresh_learned(&items);
                        app.store.save_vocabulary(&items).context("Failed to save vocabulary")?;
                        app.store.save_stats(&stats).context("Failed to save stats")?;

                        answered += 1;
                        if outcome.correct {
                            correct += 1;
                            println!("{}", paint("Correct!", Color::GREEN, use_color));
                        } else {
                            let answer = &round.options()[round.correct_index()];
                            println!(
                                "{} {}",
                                paint("Wrong, the answer is", Color::RED, use_color),
                                answer
                            );
                        }
                        println!(
                            "Next review in {}",
                            due_in(outcome.updated.next_review_date, now_millis())
                        );
                        break;
                    }
                    Ok(None) => break,
                    Err(e) => println!("{}", e),
                },
            }
        }
    }

    println!();
    println!("Answered {} ({} correct)", answered, correct);
    Ok(())
}

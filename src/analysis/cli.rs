use super::analyzer::Analyzer;
use super::player::PlayerResult;
use super::query::Args;
use super::query::Query;
use super::settings::Settings;
use super::standing::Standing;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::score::Scorer;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

/// Interactive front end over [`Analyzer`].
#[derive(Default)]
pub struct CLI;

impl CLI {
    pub fn run(&self) {
        log::info!("launching analysis");
        loop {
            print!("> ");
            let ref mut input = String::new();
            if std::io::stdout().flush().is_err() {
                break;
            }
            match std::io::stdin().read_line(input) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                line => match Args::try_parse_from(std::iter::once("> ").chain(line.split_whitespace())) {
                    Err(e) => eprintln!("{}", e),
                    Ok(Args { query: None, .. }) => continue,
                    Ok(Args { query: Some(query), .. }) => {
                        if let Err(e) = self.handle(query) {
                            eprintln!("handle error: {}", e);
                        }
                    }
                },
            }
        }
    }

    pub fn handle(&self, query: Query) -> anyhow::Result<()> {
        match query {
            Query::Evaluate {
                hands,
                board,
                dead,
                sample,
                seed,
                json,
            } => {
                let settings = Settings::default();
                let settings = match sample {
                    Some(trials) => settings.sampled(trials),
                    None => settings,
                };
                let settings = match seed {
                    Some(seed) => settings.seeded(seed),
                    None => settings,
                };
                let results = <Analyzer>::default()
                    .with_settings(settings)
                    .evaluate(&hands, &board, &dead)?;
                match json {
                    true => println!("{}", serde_json::to_string_pretty(&results)?),
                    false => Self::print(&results),
                }
                Ok(())
            }
            Query::Describe { score } => {
                let description = <Analyzer>::default().decode(score);
                match description.is_valid() {
                    true => println!("{:<8}{}", score, description),
                    false => println!("{:<8}{}", score, "invalid score".red()),
                }
                Ok(())
            }
            Query::Best { cards } => {
                let cards = Vec::<Card>::from(Hand::try_from(cards.as_str())?);
                let analyzer = <Analyzer>::default();
                let best = crate::score::five_best(analyzer.scorer(), &cards);
                let score = analyzer.scorer().score_cards(&best);
                println!(
                    "{}  {}",
                    best.iter().map(|c| c.to_string()).collect::<Vec<String>>().join(" "),
                    crate::score::Description::from(score).title()
                );
                Ok(())
            }
            Query::Deck { remove } => {
                let deck = Deck::from(Hand::try_from(remove.as_str())?);
                println!(
                    "{} cards\n{}",
                    deck.size(),
                    deck.remaining()
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<String>>()
                        .join(" ")
                );
                Ok(())
            }
        }
    }

    fn print(results: &[PlayerResult]) {
        for (i, player) in results.iter().enumerate() {
            let text = player.to_string();
            let (head, body) = text.split_once('\n').unwrap_or((text.as_str(), ""));
            let head = match player.standing() {
                Standing::Ahead => head.green(),
                Standing::Tied => head.yellow(),
                Standing::Behind => head.red(),
            };
            println!("Player {}: {}\n{}", i + 1, head, body);
        }
    }
}

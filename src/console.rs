//! Interactive consultation console.
//!
//! Renders the consultation form as a terminal session: pick a specialist,
//! type a question (blank line sends it), read the reply. Loops until the
//! user exits.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::consultation::Consultant;
use crate::error::{Error, Result};
use crate::specialist::Specialist;

const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Run the interactive console until the user exits (or EOF).
pub async fn run_console(consultant: &Consultant) -> Result<()> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| Error::Internal(format!("Failed to initialize line editor: {}", e)))?;

    print_header();

    loop {
        let specialist = match select_specialist(&mut rl)? {
            Some(s) => s,
            None => break,
        };

        let question = match read_question(&mut rl)? {
            Some(q) => q,
            None => break,
        };

        if question.trim().is_empty() {
            println!("{}質問を入力してください。{}", YELLOW, RESET);
            println!();
            continue;
        }

        println!();
        println!("{}{}が回答を準備しています...{}", DIM, specialist.label(), RESET);
        println!();

        match consultant.consult(specialist, &question).await {
            Ok(reply) => {
                println!("{}📝 {}からの回答{}", GREEN, specialist.label(), RESET);
                println!();
                println!("{}", reply);
            }
            Err(e) => {
                eprint!("{}", e.format_for_terminal());
            }
        }

        println!();
        println!("{}───────────────────────────────────────{}", DIM, RESET);
        println!();
    }

    println!("{}ご利用ありがとうございました。{}", DIM, RESET);
    Ok(())
}

/// Print the application header, usage notes, and disclaimer.
fn print_header() {
    println!("{}🏥 AI医療相談アプリ{}", CYAN, RESET);
    println!();
    println!("4つの専門分野の医師(外科医、内科医、小児科医、整形外科医)の");
    println!("いずれかを選択して、医療に関する質問をすることができます。");
    println!();
    println!("  1. 相談したい医師の専門分野を選択してください");
    println!("  2. 医療に関する質問や相談内容を入力してください(空行で送信)");
    println!("  3. AI医師からの回答を確認してください");
    println!();
    println!(
        "{}⚠️  このアプリケーションはAIによる情報提供のみを目的としており、\
         実際の医療診断や治療の代替ではありません。重要な健康問題については、\
         必ず実際の医療機関を受診してください。{}",
        YELLOW, RESET
    );
    println!();
}

/// Show the specialist selector and read a choice.
///
/// Returns `None` when the user exits (exit/quit, Ctrl-D).
fn select_specialist(rl: &mut DefaultEditor) -> Result<Option<Specialist>> {
    println!("{}👨‍⚕️ 相談する専門家を選択してください{}", CYAN, RESET);
    for (i, s) in Specialist::all().iter().enumerate() {
        println!("  {}. {}", i + 1, s.label());
    }
    println!("{}(exit で終了){}", DIM, RESET);

    loop {
        match rl.readline("専門分野 [1-4]> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "exit" || trimmed == "quit" {
                    return Ok(None);
                }

                let _ = rl.add_history_entry(&line);

                // Accept the menu number, the slug, or the Japanese label
                let choice = match trimmed {
                    "1" => Ok(Specialist::Surgeon),
                    "2" => Ok(Specialist::Internist),
                    "3" => Ok(Specialist::Pediatrician),
                    "4" => Ok(Specialist::Orthopedist),
                    other => other.parse::<Specialist>(),
                };

                match choice {
                    Ok(specialist) => return Ok(Some(specialist)),
                    Err(_) => {
                        println!(
                            "{}1〜4の番号、または専門分野名を入力してください。{}",
                            YELLOW, RESET
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}exit で終了できます。{}", DIM, RESET);
            }
            Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(Error::Internal(format!("Readline error: {}", e))),
        }
    }
}

/// Read a multi-line question. A blank line sends it.
///
/// Returns `None` on EOF.
fn read_question(rl: &mut DefaultEditor) -> Result<Option<String>> {
    println!();
    println!("{}💬 ご質問・ご相談内容{}", CYAN, RESET);
    println!("{}質問を入力してください(空行で送信):{}", DIM, RESET);

    let mut lines: Vec<String> = Vec::new();

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    return Ok(Some(lines.join("\n")));
                }
                let _ = rl.add_history_entry(&line);
                lines.push(line);
            }
            Err(ReadlineError::Interrupted) => {
                // Discard the half-typed question and go back to the selector
                return Ok(Some(String::new()));
            }
            Err(ReadlineError::Eof) => {
                if lines.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(lines.join("\n")));
            }
            Err(e) => return Err(Error::Internal(format!("Readline error: {}", e))),
        }
    }
}

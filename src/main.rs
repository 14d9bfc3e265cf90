use std::env;
use std::process;

fn main() {
  let path = match env::args().nth(1) {
    Some(path) => path,
    None => {
      eprintln!("usage: rle <pattern.rle>");
      process::exit(2);
    }
  };

  let mut parser = rle::Parser::new();
  let board = match parser.read_file(&path) {
    Ok(board) => board,
    Err(err) => {
      eprintln!("error: {}", err);
      process::exit(1);
    }
  };

  for warning in parser.warnings() {
    eprintln!("warning: {}", warning);
  }

  println!("{} ({} x {})", board.name(), board.width(), board.height());
  match board.parsed_rule() {
    Some(Ok(rule)) => println!("rule {}", rule),
    Some(Err(err)) => println!("rule {} ({})", board.rule(), err),
    None => {}
  }
  println!("{}", board.render());
}

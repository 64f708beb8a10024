use std::env;
use std::io::{self, BufRead, Write};
use std::num::NonZero;
use std::str::FromStr;

use chameleons::{Board, Color, Dimension, Direction, Location, Rotation};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1).take(2).flat_map(|s| s.parse::<u64>());
    let side = NonZero::new(args.next().unwrap_or(5) as usize)
        .unwrap_or_else(|| NonZero::new(5).unwrap());
    let seed = args.next().unwrap_or_else(|| rand::rng().random());

    let mut board = scrambled(side, seed);
    let mut moves = 0u32;

    println!("make the whole board one color");
    println!("  r X Y      rotate the cell at (X, Y) clockwise");
    println!("  l X Y      rotate it counter-clockwise");
    println!("  f X Y C    fill a root (arrow pointing off the board) with color C");
    println!("  n [SEED]   new board        q  quit");
    render(&board, moves);
    prompt();

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let mut words = line.split_whitespace();

        match words.next() {
            Some("q") => break,
            Some("n") => {
                let seed = words
                    .next()
                    .and_then(|word| word.parse().ok())
                    .unwrap_or_else(|| rand::rng().random());
                board = scrambled(side, seed);
                moves = 0;
                render(&board, moves);
            }
            Some(turn @ "r") | Some(turn @ "l") => match parse_location(&mut words, side) {
                Some(location) => {
                    let rotation = match turn {
                        "r" => Rotation::Clockwise,
                        _ => Rotation::CounterClockwise,
                    };
                    board.rotate(location, rotation);
                    moves += 1;
                    render(&board, moves);
                }
                None => println!("expected: {} X Y", turn),
            },
            Some("f") => {
                let location = parse_location(&mut words, side);
                let color = words.next().and_then(|word| Color::from_str(word).ok());
                match (location, color) {
                    (Some(location), Some(color)) => {
                        board.fill(location, color);
                        render(&board, moves);
                    }
                    _ => println!("expected: f X Y COLOR (red orange gold green blue indigo violet)"),
                }
            }
            Some(other) => println!("unknown command {:?}", other),
            None => {}
        }

        prompt();
    }
}

fn scrambled(side: Dimension, seed: u64) -> Board {
    println!("board seed: {}", seed);

    Board::scrambled(side, &mut SmallRng::seed_from_u64(seed))
}

fn parse_location<'a>(words: &mut impl Iterator<Item = &'a str>, side: Dimension) -> Option<Location> {
    let x = words.next()?.parse().ok()?;
    let y = words.next()?.parse().ok()?;

    (x < side.get() && y < side.get()).then_some(Location(x, y))
}

fn render(board: &Board, moves: u32) {
    let side = board.side().get();

    print!("   ");
    for x in 0..side {
        print!("{} ", x % 10);
    }
    println!();

    for y in 0..side {
        print!("{:>2} ", y);
        for x in 0..side {
            let location = Location(x, y);
            print!(
                "\x1b[38;5;{}m{}\x1b[0m ",
                ansi(board.color_at(location).unwrap()),
                arrow(board.direction_at(location).unwrap()),
            );
        }
        println!();
    }

    println!("moves: {}", moves);
    if board.is_solved() {
        println!("\x1b[1msolved in {} moves!\x1b[0m", moves);
    }
}

fn arrow(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Right => '>',
        Direction::Down => 'v',
        Direction::Left => '<',
    }
}

// 256-color palette indices
fn ansi(color: Color) -> u8 {
    match color {
        Color::Red => 196,
        Color::Orange => 208,
        Color::Gold => 220,
        Color::Green => 40,
        Color::Blue => 27,
        Color::Indigo => 57,
        Color::Violet => 129,
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

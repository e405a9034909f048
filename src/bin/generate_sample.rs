use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const TEAMS: [(&str, &str, &str); 30] = [
    ("ATL", "Atlanta Hawks", "East"),
    ("BOS", "Boston Celtics", "East"),
    ("BRK", "Brooklyn Nets", "East"),
    ("CHO", "Charlotte Hornets", "East"),
    ("CHI", "Chicago Bulls", "East"),
    ("CLE", "Cleveland Cavaliers", "East"),
    ("DET", "Detroit Pistons", "East"),
    ("IND", "Indiana Pacers", "East"),
    ("MIA", "Miami Heat", "East"),
    ("MIL", "Milwaukee Bucks", "East"),
    ("NYK", "New York Knicks", "East"),
    ("ORL", "Orlando Magic", "East"),
    ("PHI", "Philadelphia 76ers", "East"),
    ("TOR", "Toronto Raptors", "East"),
    ("WAS", "Washington Wizards", "East"),
    ("DAL", "Dallas Mavericks", "West"),
    ("DEN", "Denver Nuggets", "West"),
    ("GSW", "Golden State Warriors", "West"),
    ("HOU", "Houston Rockets", "West"),
    ("LAC", "LA Clippers", "West"),
    ("LAL", "Los Angeles Lakers", "West"),
    ("MEM", "Memphis Grizzlies", "West"),
    ("MIN", "Minnesota Timberwolves", "West"),
    ("NOP", "New Orleans Pelicans", "West"),
    ("OKC", "Oklahoma City Thunder", "West"),
    ("PHO", "Phoenix Suns", "West"),
    ("POR", "Portland Trail Blazers", "West"),
    ("SAC", "Sacramento Kings", "West"),
    ("SAS", "San Antonio Spurs", "West"),
    ("UTA", "Utah Jazz", "West"),
];

const FIRST_NAMES: [&str; 12] = [
    "Jérôme", "Marcus", "André", "Tyrese", "Luka", "Jalen", "Nikola", "Desmond", "Théo", "Kevin", "Mikal",
    "Zoë",
];
const LAST_NAMES: [&str; 10] = [
    "Okafor", "Williams", "Müller", "Brown", "Vučić", "Johnson", "Peña", "Green", "Doumbouya", "Smith",
];
const POSITIONS: [&str; 5] = ["PG", "SG", "SF", "PF", "C"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

struct Line {
    player: String,
    pos: &'static str,
    age: u32,
    team: &'static str,
    games: u32,
    minutes: f64,
    fg_pct: Option<f64>,
    assists: f64,
    rebounds: f64,
    steals: f64,
    blocks: f64,
    points: f64,
}

fn random_line(rng: &mut SimpleRng, player: &str, pos: &'static str, age: u32, team: &'static str) -> Line {
    let minutes = round1(rng.uniform(2.0, 37.5));
    let usage = minutes / 36.0;
    let fg_pct = if minutes < 3.0 {
        None
    } else {
        Some(round3(rng.uniform(0.38, 0.62)))
    };
    Line {
        player: player.to_string(),
        pos,
        age,
        team,
        games: 10 + rng.below(72) as u32,
        minutes,
        fg_pct,
        assists: round1(usage * rng.uniform(0.5, 9.0)),
        rebounds: round1(usage * rng.uniform(2.0, 12.0)),
        steals: round1(usage * rng.uniform(0.2, 1.8)),
        blocks: round1(usage * rng.uniform(0.1, 2.0)),
        points: round1(usage * rng.uniform(6.0, 32.0)),
    }
}

fn player_lines(rng: &mut SimpleRng) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut n = 0;
    for (code, _, _) in TEAMS {
        for _ in 0..12 {
            let name = format!(
                "{} {} {}",
                FIRST_NAMES[n % FIRST_NAMES.len()],
                LAST_NAMES[(n / FIRST_NAMES.len()) % LAST_NAMES.len()],
                n
            );
            n += 1;
            let pos = POSITIONS[rng.below(POSITIONS.len())];
            let age = 19 + rng.below(18) as u32;

            // Every ninth player is traded mid-season.
            if n % 9 == 0 {
                let (other, _, _) = TEAMS[rng.below(TEAMS.len())];
                let first = random_line(rng, &name, pos, age, code);
                let second = random_line(rng, &name, pos, age, other);
                let g = (first.games + second.games) as f64;
                let w = |a: f64, b: f64| round1((a * first.games as f64 + b * second.games as f64) / g);
                let total = Line {
                    player: name.clone(),
                    pos,
                    age,
                    team: "TOT",
                    games: first.games + second.games,
                    minutes: w(first.minutes, second.minutes),
                    fg_pct: first.fg_pct.or(second.fg_pct),
                    assists: w(first.assists, second.assists),
                    rebounds: w(first.rebounds, second.rebounds),
                    steals: w(first.steals, second.steals),
                    blocks: w(first.blocks, second.blocks),
                    points: w(first.points, second.points),
                };
                lines.push(total);
                lines.push(first);
                lines.push(second);
            } else {
                lines.push(random_line(rng, &name, pos, age, code));
            }
        }
    }
    lines
}

fn write_players(path: &Path, lines: &[Line]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(Vec::new());
    writer.write_record([
        "Rk", "Player", "Pos", "Age", "Tm", "G", "MP", "FG%", "TRB", "AST", "STL", "BLK", "PTS",
    ])?;
    let mut rank = 0;
    let mut previous = "";
    for line in lines {
        if line.player != previous {
            rank += 1;
            previous = line.player.as_str();
        }
        writer.write_record([
            rank.to_string(),
            line.player.clone(),
            line.pos.to_string(),
            line.age.to_string(),
            line.team.to_string(),
            line.games.to_string(),
            line.minutes.to_string(),
            line.fg_pct.map(|v| v.to_string()).unwrap_or_default(),
            line.rebounds.to_string(),
            line.assists.to_string(),
            line.steals.to_string(),
            line.blocks.to_string(),
            line.points.to_string(),
        ])?;
    }
    let utf8 = String::from_utf8(writer.into_inner().map_err(|e| e.into_error())?)?;

    // Latin-1: characters outside it are replaced with '?'.
    let latin1: Vec<u8> = utf8
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect();
    std::fs::write(path, latin1).with_context(|| format!("writing {}", path.display()))
}

fn write_teams(dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    let actual_path = dir.join("team_stats.csv");
    let mut actual = csv::Writer::from_path(&actual_path).with_context(|| format!("creating {}", actual_path.display()))?;
    actual.write_record(["TEAM", "WIN%", "CONF", "PACE", "PPG", "dEFF"])?;

    let mut expected_rows = Vec::new();
    for (_, name, conf) in TEAMS {
        let win = round3(rng.uniform(0.18, 0.80));
        let projected = round3((win + rng.uniform(-0.15, 0.15)).clamp(0.15, 0.80));
        // Team names in the real export carry trailing padding.
        actual.write_record([
            format!("{name} "),
            win.to_string(),
            conf.to_string(),
            round1(rng.uniform(96.0, 102.5)).to_string(),
            round1(rng.uniform(106.0, 121.0)).to_string(),
            round1(rng.uniform(108.0, 119.5)).to_string(),
        ])?;
        expected_rows.push((name, projected));
    }
    actual.flush()?;

    // Different row order than the actual table.
    expected_rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    let expected_path = dir.join("team_expected.csv");
    let mut expected =
        csv::Writer::from_path(&expected_path).with_context(|| format!("creating {}", expected_path.display()))?;
    expected.write_record(["TEAM_NAME", "W_PCT"])?;
    for (name, pct) in expected_rows {
        expected.write_record([name.to_string(), pct.to_string()])?;
    }
    expected.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let dir: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data"));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let lines = player_lines(&mut rng);
    write_players(&dir.join("2023-2024 NBA Player Stats - Regular.csv"), &lines)?;
    write_teams(&dir, &mut rng)?;

    println!(
        "Wrote {} player lines and {} teams to {}",
        lines.len(),
        TEAMS.len(),
        dir.display()
    );
    Ok(())
}

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use prettypalette::{
    write_line, ColorLists, Env, Environment, Palette, Policy, RangeSampler, SimulatedAnnealing,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate visually distinct color sets of sizes 1 through MAX_COLORS.
///
/// The output has one line per set size, with each color written as a signed
/// decimal integer packing alpha, red, green, and blue.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The size of the largest color set
    max_colors: usize,

    /// The sampling policy
    #[arg(short, long, value_name = "POLICY", default_value = "uniform")]
    generator: Policy,

    /// The seed for the random number generator, falling back on the
    /// PRETTYPALETTE_SEED environment variable
    #[arg(short, long)]
    seed: Option<u64>,

    /// A color list file whose sets are used instead of generating new ones
    #[arg(short, long, value_name = "FILE")]
    cache: Option<PathBuf>,

    /// The output file instead of standard out
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn run<W: Write>(
    cli: &Cli,
    generator: &SimulatedAnnealing<RangeSampler>,
    rng: &mut StdRng,
    out: &mut W,
) -> std::io::Result<()> {
    let cache = match &cli.cache {
        Some(path) => ColorLists::read(BufReader::new(File::open(path)?))?,
        None => ColorLists::new(),
    };

    for n in 1..=cli.max_colors {
        match cache.get(n) {
            Some(colors) if colors.len() == n => {
                info!("reusing cached colors for set size {}", n);
                write_line(out, colors)?;
                continue;
            }
            Some(colors) => warn!(
                "ignoring cache line {} with {} instead of {} colors",
                n,
                colors.len(),
                n
            ),
            None => (),
        }

        let mut colors: Vec<_> = generator.generate(n, rng).into_iter().collect();
        colors.sort_unstable_by_key(|color| color.to_i32());

        let palette: Palette = colors.iter().copied().collect();
        info!(
            "generated {} {} colors with minimum distance {:.2}",
            colors.len(),
            cli.generator,
            palette.min_distance().unwrap_or(0.0)
        );
        write_line(out, &colors)?;
    }

    out.flush()
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(seed) => Some(seed),
        None => Env::default().seed()?,
    };
    let mut rng = match seed {
        Some(seed) => {
            info!("seeding random number generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let generator = SimulatedAnnealing::new(cli.generator.sampler());
    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            run(&cli, &generator, &mut rng, &mut out)
        }
        None => {
            let mut out = std::io::stdout().lock();
            run(&cli, &generator, &mut rng, &mut out)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{run, Cli};
    use clap::Parser;
    use prettypalette::{
        ColorLists, Policy, RangeSampler, Rgb, RgbSampler, Schedule, SimulatedAnnealing,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn quick_generator(cli: &Cli) -> SimulatedAnnealing<RangeSampler> {
        SimulatedAnnealing::with_schedule(
            cli.generator.sampler(),
            Schedule::default().with_iterations(10).with_candidates(500),
        )
    }

    fn run_with_cache(name: &str, cache: &str, max_colors: usize) -> std::io::Result<String> {
        let path: PathBuf =
            std::env::temp_dir().join(format!("palettegen-{}-{}.txt", name, std::process::id()));
        std::fs::write(&path, cache)?;

        let cli = Cli::try_parse_from([
            "palettegen".to_string(),
            "-c".to_string(),
            path.display().to_string(),
            max_colors.to_string(),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = Vec::new();
        let result = run(&cli, &quick_generator(&cli), &mut rng, &mut out);
        std::fs::remove_file(&path)?;
        result?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_arguments() {
        let cli = Cli::try_parse_from(["palettegen", "-g", "pastel", "-s", "42", "7"]).unwrap();
        assert_eq!(cli.max_colors, 7);
        assert_eq!(cli.generator, Policy::Pastel);
        assert_eq!(cli.seed, Some(42));
        assert!(cli.cache.is_none());

        let cli = Cli::try_parse_from(["palettegen", "3"]).unwrap();
        assert_eq!(cli.generator, Policy::Uniform);

        assert!(Cli::try_parse_from(["palettegen", "-g", "neon", "3"]).is_err());
        assert!(Cli::try_parse_from(["palettegen"]).is_err());
    }

    #[test]
    fn test_single_color() -> std::io::Result<()> {
        let cli = Cli::try_parse_from(["palettegen", "--generator", "pastel", "1"]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut out = Vec::new();
        run(&cli, &quick_generator(&cli), &mut rng, &mut out)?;

        let mut rng = StdRng::seed_from_u64(5);
        let expected = RangeSampler::PASTEL.sample_any(&mut rng);
        assert_eq!(
            String::from_utf8_lossy(&out),
            format!("{}\n", expected.to_i32())
        );
        Ok(())
    }

    #[test]
    fn test_cached_colors() -> std::io::Result<()> {
        let out = run_with_cache("complete", "-1\n-16777216 -65536\n", 2)?;
        let lists = ColorLists::parse(&out)?;
        assert_eq!(lists.get(1), Some(&[Rgb::new(255, 255, 255)][..]));
        assert_eq!(
            lists.get(2),
            Some(&[Rgb::new(0, 0, 0), Rgb::new(255, 0, 0)][..])
        );
        Ok(())
    }

    #[test]
    fn test_wrong_sized_cache_lines_are_regenerated() -> std::io::Result<()> {
        let out = run_with_cache(
            "wrong-sized",
            "-1\n\n-1 -65536 -16711936 -16776961\n",
            3,
        )?;
        let lists = ColorLists::parse(&out)?;

        let sizes: Vec<usize> = lists.iter().map(|list| list.len()).collect();
        assert_eq!(sizes, vec![1, 2, 3]);
        assert_eq!(lists.get(1), Some(&[Rgb::new(255, 255, 255)][..]));
        assert!(lists.is_complete());
        Ok(())
    }
}

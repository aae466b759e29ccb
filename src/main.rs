use maze_engine::{Generator, Solver, generate_maze, solve_maze};

/// Log to a file instead of stdout so the log lines do not interleave with
/// the rendered maze.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "maze-engine.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let mut input = String::new();
    println!("Enter maze dimensions (width height):");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }

    let (width, height) = (dims[0], dims[1]);
    if width < 1 || height < 1 {
        eprintln!("Width and height must be at least 1.");
        return Ok(());
    }

    // Let user select the algorithm
    println!("Select maze generation algorithm:");
    println!("1. {}", Generator::RecursiveBacktracking);
    println!("2. {}", Generator::Prims);
    println!("3. {}", Generator::Kruskals);
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let generator = match input.trim() {
        "1" => Generator::RecursiveBacktracking,
        "2" => Generator::Prims,
        "3" => Generator::Kruskals,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    // An optional seed from the environment pins the maze for reruns
    let seed = std::env::var("MAZE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok());

    let maze = match generate_maze(width, height, generator, seed) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            return Ok(());
        }
    };
    println!("{maze}");

    println!("Select maze solving algorithm:");
    println!("1. {}", Solver::Bfs);
    println!("2. {}", Solver::Dfs);
    println!("3. {}", Solver::AStar);
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let solver = match input.trim() {
        "1" => Solver::Bfs,
        "2" => Solver::Dfs,
        "3" => Solver::AStar,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    let solution = match solve_maze(maze.grid(), maze.start(), maze.end(), solver) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("Solve failed: {err}");
            return Ok(());
        }
    };

    if solution.path.is_empty() {
        println!("No path found to the goal.");
    } else {
        println!("{}", maze.render_with_path(&solution.path));
        println!(
            "Maze solved: {} cells, {} nodes explored in {:.6}s.",
            solution.stats.path_length, solution.stats.nodes_explored, solution.stats.execution_time
        );
    }

    // The solution JSON is what an embedding service would persist verbatim
    if std::env::var("MAZE_DUMP_JSON").is_ok_and(|v| v == "1") {
        println!("{}", serde_json::to_string(&solution)?);
    }
    Ok(())
}

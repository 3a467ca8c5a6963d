//! 遗传算法模块
//!
//! 用遗传算法近似求解旅行商问题：锦标赛选择、两点 PMX 交叉、交换变异与精英保留。
//! 缺失的边按固定惩罚值计入适应度

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::palette::{self, VertexColor};
use super::trace::{joined, Trace};
use crate::core::{AlgorithmError, VertexRole};
use crate::graph::{Edge, Graph};

/// 缺失边的惩罚代价
pub const PENALTY: f64 = 999_999.0;

/// 锦标赛规模
const TOURNAMENT_SIZE: usize = 3;

/// 遗传算法配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub generations: usize,
    /// 每代原样保留的最优个体数
    pub elitism: usize,
    /// PMX 的两个切点
    pub crossover_points: [usize; 2],
    /// 随机种子，不设置时使用系统熵
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            generations: 50,
            elitism: 2,
            crossover_points: [1, 3],
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// 检查配置是否合法
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if self.population_size == 0 {
            return Err(AlgorithmError::invalid_config(
                "population_size must be at least 1",
            ));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(AlgorithmError::invalid_config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, rate
                )));
            }
        }
        if self.elitism > self.population_size {
            return Err(AlgorithmError::invalid_config(format!(
                "elitism ({}) cannot exceed population_size ({})",
                self.elitism, self.population_size
            )));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// 种群中的一个个体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Individual {
    /// 不含出发城市的访问顺序
    pub route: Vec<String>,
    /// 含惩罚的总代价，越小越好
    pub fitness: f64,
    /// 不含惩罚的代价；使用了缺失边时为无穷大
    pub real_cost: f64,
    /// 从出发城市出发并回到出发城市的完整路线
    pub full_route: Vec<String>,
}

/// 某一代的统计
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best: f64,
    pub average: f64,
    pub worst: f64,
}

/// 遗传算法结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeneticResult {
    /// 最优的闭合路线
    pub best_route: Vec<String>,
    pub best_cost: f64,
    pub history: Vec<GenerationStats>,
    pub final_population: Vec<Individual>,
    pub route_edges: Vec<Edge>,
    /// `(n-1)!`，溢出时为 `None`
    pub search_space: Option<u128>,
    pub coloring: Vec<VertexColor>,
    pub config: GeneticConfig,
    /// 被进度回调中止时的代数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_at: Option<usize>,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AlgorithmError>,
}

impl GeneticResult {
    fn failed(config: &GeneticConfig, error: AlgorithmError) -> Self {
        Self {
            best_cost: f64::INFINITY,
            config: config.clone(),
            trace: Trace::single(error.to_string()),
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 以顶点下标表示的路线
#[derive(Debug, Clone)]
struct Tour {
    cities: Vec<usize>,
    fitness: f64,
    real_cost: f64,
}

/// 单次运行的上下文：图的权重矩阵与随机数发生器
struct Evolution<'a> {
    graph: &'a Graph,
    start: usize,
    /// weights[a][b]：从 a 到 b 的第一条边的权重
    weights: Vec<Vec<Option<f64>>>,
    config: &'a GeneticConfig,
    rng: StdRng,
}

impl<'a> Evolution<'a> {
    fn new(graph: &'a Graph, start: usize, config: &'a GeneticConfig) -> Self {
        let n = graph.vertex_count();
        let mut weights = vec![vec![None; n]; n];
        for a in 0..n {
            for b in 0..n {
                weights[a][b] = graph
                    .find_edge(&graph.vertices[a].id, &graph.vertices[b].id)
                    .map(|e| e.weight);
            }
        }
        Self {
            graph,
            start,
            weights,
            config,
            rng: config.rng(),
        }
    }

    fn weight(&self, a: usize, b: usize) -> f64 {
        self.weights[a][b].unwrap_or(PENALTY)
    }

    /// 计算 start -> ... -> start 的代价
    fn evaluate(&self, cities: Vec<usize>) -> Tour {
        let mut fitness = 0.0;
        let mut penalized = false;
        let mut previous = self.start;
        for &city in cities.iter().chain(std::iter::once(&self.start)) {
            match self.weights[previous][city] {
                Some(weight) => fitness += weight,
                None => {
                    fitness += PENALTY;
                    penalized = true;
                }
            }
            previous = city;
        }
        Tour {
            cities,
            fitness,
            real_cost: if penalized { f64::INFINITY } else { fitness },
        }
    }

    fn random_tour(&mut self) -> Tour {
        let mut cities: Vec<usize> = (0..self.graph.vertex_count())
            .filter(|&i| i != self.start)
            .collect();
        cities.shuffle(&mut self.rng);
        self.evaluate(cities)
    }

    /// 有放回地抽取 3 个个体，返回适应度最低者
    fn tournament<'p>(&mut self, population: &'p [Tour]) -> &'p Tour {
        let mut best = &population[self.rng.gen_range(0..population.len())];
        for _ in 1..TOURNAMENT_SIZE {
            let candidate = &population[self.rng.gen_range(0..population.len())];
            if candidate.fitness < best.fitness {
                best = candidate;
            }
        }
        best
    }

    fn mutate(&mut self, tour: Tour) -> Tour {
        let mut cities = tour.cities;
        let a = self.rng.gen_range(0..cities.len());
        let b = self.rng.gen_range(0..cities.len());
        cities.swap(a, b);
        self.evaluate(cities)
    }

    fn next_generation(&mut self, population: &[Tour]) -> Vec<Tour> {
        let size = self.config.population_size;
        let mut next: Vec<Tour> = population
            .iter()
            .take(self.config.elitism)
            .cloned()
            .collect();

        while next.len() < size {
            let first = self.tournament(population).clone();
            let second = self.tournament(population).clone();

            let (mut child_a, mut child_b) = if self.rng.gen::<f64>() < self.config.crossover_rate
            {
                let [p1, p2] = self.config.crossover_points;
                let (a, b) = pmx(&first.cities, &second.cities, p1, p2);
                (self.evaluate(a), self.evaluate(b))
            } else {
                (first, second)
            };

            if self.rng.gen::<f64>() < self.config.mutation_rate {
                child_a = self.mutate(child_a);
            }
            if self.rng.gen::<f64>() < self.config.mutation_rate {
                child_b = self.mutate(child_b);
            }

            next.push(child_a);
            if next.len() < size {
                next.push(child_b);
            }
        }

        sort_by_fitness(&mut next);
        next
    }

    fn ids(&self, cities: &[usize]) -> Vec<String> {
        cities
            .iter()
            .map(|&i| self.graph.vertices[i].id.clone())
            .collect()
    }

    fn closed_route(&self, tour: &Tour) -> Vec<String> {
        let start = self.graph.vertices[self.start].id.clone();
        let mut route = vec![start.clone()];
        route.extend(self.ids(&tour.cities));
        route.push(start);
        route
    }

    fn individual(&self, tour: &Tour) -> Individual {
        Individual {
            route: self.ids(&tour.cities),
            fitness: tour.fitness,
            real_cost: tour.real_cost,
            full_route: self.closed_route(tour),
        }
    }
}

/// 两点 PMX 交叉
///
/// 切点先排序，再截断到 `len - 1`，保证子代始终是合法排列
fn pmx(first: &[usize], second: &[usize], p1: usize, p2: usize) -> (Vec<usize>, Vec<usize>) {
    let len = first.len();
    let last = len.saturating_sub(1);
    let low = p1.min(p2).min(last);
    let high = p1.max(p2).min(last);

    let fill = |segment_from: &[usize], rest_from: &[usize]| -> Vec<usize> {
        let segment = &segment_from[low..=high];
        let mut child = vec![0usize; len];
        child[low..=high].copy_from_slice(segment);
        for i in (0..len).filter(|i| *i < low || *i > high) {
            let mut value = rest_from[i];
            while segment.contains(&value) {
                let Some(position) = segment_from.iter().position(|&v| v == value) else {
                    break;
                };
                value = rest_from[position];
            }
            child[i] = value;
        }
        child
    };

    (fill(second, first), fill(first, second))
}

fn sort_by_fitness(population: &mut [Tour]) {
    population.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
}

fn stats(generation: usize, population: &[Tour]) -> GenerationStats {
    let total: f64 = population.iter().map(|t| t.fitness).sum();
    GenerationStats {
        generation,
        best: population.first().map_or(f64::INFINITY, |t| t.fitness),
        average: total / population.len().max(1) as f64,
        worst: population.last().map_or(f64::INFINITY, |t| t.fitness),
    }
}

fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// 遗传算法求解旅行商问题
pub struct GeneticTsp;

impl GeneticTsp {
    /// 以 `start` 为出发城市运行遗传算法
    pub fn run(graph: &Graph, start: &str, config: &GeneticConfig) -> GeneticResult {
        Self::evolve(graph, start, config, None)
    }

    /// 同 [`GeneticTsp::run`]，每代结束后调用 `progress(代数, 最优个体, 种群)`，
    /// 返回 `false` 时停止演化
    pub fn run_with_progress<F>(
        graph: &Graph,
        start: &str,
        config: &GeneticConfig,
        mut progress: F,
    ) -> GeneticResult
    where
        F: FnMut(usize, &Individual, &[Individual]) -> bool,
    {
        Self::evolve(graph, start, config, Some(&mut progress))
    }

    /// 没有回调时不生成每代的种群快照
    fn evolve(
        graph: &Graph,
        start: &str,
        config: &GeneticConfig,
        mut progress: Option<&mut dyn FnMut(usize, &Individual, &[Individual]) -> bool>,
    ) -> GeneticResult {
        let Some(start_index) = graph.index_of(start) else {
            return GeneticResult::failed(
                config,
                AlgorithmError::vertex_not_found(VertexRole::City, start),
            );
        };
        if graph.vertex_count() < 3 {
            return GeneticResult::failed(
                config,
                AlgorithmError::TooFewVertices {
                    required: 3,
                    found: graph.vertex_count(),
                },
            );
        }
        if let Err(error) = config.validate() {
            return GeneticResult::failed(config, error);
        }

        let n = graph.vertex_count();
        let mut result = GeneticResult {
            config: config.clone(),
            search_space: factorial(n - 1),
            ..Default::default()
        };
        let mut evolution = Evolution::new(graph, start_index, config);

        let trace = &mut result.trace;
        trace.push("=== GENETIC ALGORITHM - TRAVELING SALESMAN ===");
        trace.push(format!("Starting city: {}", start));
        trace.push(format!("Cities: {}", n));
        match result.search_space {
            Some(total) => trace.push(format!(
                "Possible routes: ({} - 1)! = {}",
                n, total
            )),
            None => trace.push(format!("Possible routes: ({} - 1)! (too large to show)", n)),
        }
        trace.blank();
        trace.push("=== CONFIGURATION ===");
        trace.push(format!("Population size: {}", config.population_size));
        trace.push(format!("Crossover rate: {:.1}%", config.crossover_rate * 100.0));
        trace.push(format!("Mutation rate: {:.2}%", config.mutation_rate * 100.0));
        trace.push(format!("Elitism: {} best preserved", config.elitism));
        trace.push(format!(
            "PMX cut points: [{}, {}]",
            config.crossover_points[0], config.crossover_points[1]
        ));
        trace.push(format!("Generations: {}", config.generations));
        if let Some(seed) = config.seed {
            trace.push(format!("Seed: {}", seed));
        }
        trace.blank();

        trace.push("Creating random initial population...");
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| evolution.random_tour())
            .collect();
        sort_by_fitness(&mut population);
        let initial = stats(0, &population);
        trace.push("Initial population created");
        trace.push(format!("   best fitness: {:.2}", initial.best));
        trace.push(format!("   average fitness: {:.2}", initial.average));
        trace.blank();

        for generation in 1..=config.generations {
            population = evolution.next_generation(&population);
            let current = stats(generation, &population);
            result.history.push(current);

            trace.push(format!("Generation {}/{}", generation, config.generations));
            trace.push(format!(
                "   best: {:.2} | average: {:.2} | worst: {:.2}",
                current.best, current.average, current.worst
            ));
            let best_route = evolution.closed_route(&population[0]);
            trace.push(format!("   best route: {}", joined(&best_route, " -> ")));

            let Some(progress) = progress.as_deref_mut() else {
                continue;
            };
            let best = evolution.individual(&population[0]);
            let snapshot: Vec<Individual> =
                population.iter().map(|t| evolution.individual(t)).collect();
            if !progress(generation, &best, &snapshot) {
                trace.push(format!("Evolution stopped at generation {}", generation));
                result.stopped_at = Some(generation);
                break;
            }
        }

        let best = &population[0];
        result.best_route = evolution.closed_route(best);
        result.best_cost = best.fitness;
        result.route_edges = result
            .best_route
            .windows(2)
            .filter_map(|pair| {
                let a = graph.index_of(&pair[0])?;
                let b = graph.index_of(&pair[1])?;
                Some(Edge::new(pair[0].clone(), pair[1].clone(), evolution.weight(a, b)))
            })
            .collect();
        result.final_population = population.iter().map(|t| evolution.individual(t)).collect();
        result.coloring = graph
            .vertices
            .iter()
            .map(|v| {
                let color = if v.id == start { palette::GREEN } else { palette::BLUE };
                VertexColor::new(v.id.clone(), color)
            })
            .collect();

        let trace = &mut result.trace;
        trace.blank();
        trace.push("=== FINISHED ===");
        trace.push(format!("Best route: {}", joined(&result.best_route, " -> ")));
        trace.push(format!("Total cost: {:.2}", result.best_cost));
        if best.real_cost.is_infinite() {
            trace.push("Warning: the best route uses missing edges (penalized)");
        }
        if let Some(first) = result.history.first() {
            if first.best > 0.0 {
                trace.push(format!(
                    "Improvement: {:.2}% over the first generation",
                    (first.best - result.best_cost) / first.best * 100.0
                ));
            }
        }

        log::debug!(
            "genetic tsp from {}: cost {} after {} generations",
            start,
            result.best_cost,
            result.history.len()
        );
        result
    }
}

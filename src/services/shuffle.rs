use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::models::QuizItem;

/// 打乱题目用的随机数生成器
///
/// 每次运行构造一次，指定种子时结果可复现。
pub struct ShuffleRng(StdRng);

impl ShuffleRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// 原地打乱题目顺序，只做置换，不增删题目
pub fn shuffle_items(items: &mut [QuizItem], rng: &mut ShuffleRng) {
    items.shuffle(&mut rng.0);
    info!("🔀 已打乱 {} 道题目的顺序", items.len());
}

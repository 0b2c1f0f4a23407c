use num_traits::Float;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Straight-line distance between two projected positions
pub fn straight_line<T>(from: (T, T), to: (T, T)) -> T
where
    T: Float,
    {
    euclidean(from.0, from.1, to.0, to.1)
}

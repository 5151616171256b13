/// Simulated upload: a percentage that climbs by a fixed step per tick.
/// Nothing is transmitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockUpload {
    progress: u32,
    in_flight: bool,
    step: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadTick {
    Advanced(u32),
    Completed,
    Idle,
}

impl MockUpload {
    pub fn new(step: u32) -> Self {
        Self {
            progress: 0,
            in_flight: false,
            step,
        }
    }

    pub fn start(&mut self) {
        if self.in_flight {
            log::warn!("Restarting mock upload that was still at {}%", self.progress);
        }
        self.in_flight = true;
        self.progress = 0;
    }

    /// A tick that finds the bar full completes the upload; the full bar is
    /// therefore shown for one period before it resets.
    pub fn tick(&mut self) -> UploadTick {
        if !self.in_flight {
            return UploadTick::Idle;
        }
        if self.progress >= 100 {
            self.in_flight = false;
            self.progress = 0;
            return UploadTick::Completed;
        }
        self.progress = (self.progress + self.step).min(100);
        UploadTick::Advanced(self.progress)
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_upload_is_idle() {
        let mut upload = MockUpload::new(5);
        assert_eq!(upload.progress(), 0);
        assert!(!upload.in_flight());
        assert_eq!(upload.tick(), UploadTick::Idle);
    }

    #[test]
    fn progress_climbs_in_steps_then_completes_once() {
        let mut upload = MockUpload::new(5);
        upload.start();
        assert!(upload.in_flight());

        let mut seen = Vec::new();
        let mut completions = 0;
        for _ in 0..30 {
            match upload.tick() {
                UploadTick::Advanced(p) => seen.push(p),
                UploadTick::Completed => completions += 1,
                UploadTick::Idle => {}
            }
        }

        let expected: Vec<u32> = (1..=20).map(|i| i * 5).collect();
        assert_eq!(seen, expected);
        assert_eq!(completions, 1);
        assert_eq!(upload.progress(), 0);
        assert!(!upload.in_flight());
    }

    #[test]
    fn completion_happens_on_the_tick_after_reaching_full() {
        let mut upload = MockUpload::new(5);
        upload.start();
        for _ in 0..20 {
            upload.tick();
        }
        assert_eq!(upload.progress(), 100);
        assert!(upload.in_flight());
        assert_eq!(upload.tick(), UploadTick::Completed);
    }

    #[test]
    fn uneven_step_is_capped_at_full() {
        let mut upload = MockUpload::new(30);
        upload.start();
        assert_eq!(upload.tick(), UploadTick::Advanced(30));
        assert_eq!(upload.tick(), UploadTick::Advanced(60));
        assert_eq!(upload.tick(), UploadTick::Advanced(90));
        assert_eq!(upload.tick(), UploadTick::Advanced(100));
        assert_eq!(upload.progress(), 100);
        assert_eq!(upload.tick(), UploadTick::Completed);
    }

    #[test]
    fn restarting_resets_progress() {
        let mut upload = MockUpload::new(5);
        upload.start();
        upload.tick();
        upload.tick();
        upload.start();
        assert_eq!(upload.progress(), 0);
        assert_eq!(upload.tick(), UploadTick::Advanced(5));
    }
}

pub struct Progress {
    total:usize,
    last:usize,
    rate:f64,
    t_first:f64,
    t_last:f64,
    delta_t:f64,
    label:String
}

fn now()->f64 {
    let dt = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap();
    (dt.as_secs() as f64) + 1e-9*(dt.subsec_nanos() as f64)
}

impl Progress {
    pub fn new(label:&str,total:usize)->Self {
        let t = now();
        Progress{
            total,
            last:0,
            rate:0.0,
            t_first:t,
            t_last:t,
            delta_t:0.5,
            label:label.to_string()
        }
    }

    pub fn update(&mut self,current:usize) {
        let t = now();
        if t >= self.t_last + self.delta_t {
            let rate = (current - self.last) as f64 / (t - self.t_last);
            self.rate = if self.rate > 0.0 { (2.0*self.rate + rate)/3.0 } else { rate };
            self.last = current;
            self.t_last = t;
            println!("{:10} {:12} {:6.2}% {:10.0}/s ETA {:8.1}s",
                     self.label,
                     current,
                     100.0*current as f64/self.total as f64,
                     self.rate,
                     (self.total - current) as f64/self.rate.max(1.0));
        }
    }

    pub fn finish(&self) {
        let elapsed = now() - self.t_first;
        println!("{:10} {:12} done in {:.1}s ({:.0}/s)",
                 self.label,
                 self.total,
                 elapsed,
                 self.total as f64/elapsed.max(1e-9));
    }
}

use clap::{{Parser}};

/// Scaling Probe - 水平扩缩容测试目标服务
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// 监听端口
    #[arg(short, long, env = "PORT",default_value_t = 3000)]
    pub port: u16,

    /// 监听地址
    #[arg(short = 'a', long, env = "ADDRESS",default_value = "0.0.0.0")]
    pub address: String,
}

use std::env;
use std::fs;
use std::process;
use log::debug;
use tei_dialogue::{Conf, TeiParser};
use tei_dialogue::export::write_xlsx;

struct Args {
    input: String,
    out: Option<String>,
    json: Option<String>,
    config: Option<String>,
    keep_stage: bool,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} <file.xml> [--out <file.xlsx>] [--json <file.json>] [--config <conf.json>] [--keep-stage]",
        program
    )
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let program = args.first().map(String::as_str).unwrap_or("tei-dialogue");
    let mut input = None;
    let mut parsed = Args {
        input: String::new(),
        out: None,
        json: None,
        config: None,
        keep_stage: false,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} 缺少参数值\n{}", flag, usage(program)))
        };
        match arg.as_str() {
            "--out" => parsed.out = Some(value("--out")?),
            "--json" => parsed.json = Some(value("--json")?),
            "--config" => parsed.config = Some(value("--config")?),
            "--keep-stage" => parsed.keep_stage = true,
            other if input.is_none() && !other.starts_with("--") => input = Some(other.to_string()),
            other => return Err(format!("未知参数: {}\n{}", other, usage(program))),
        }
    }

    parsed.input = input.ok_or_else(|| usage(program))?;
    Ok(parsed)
}

fn run(args: Args) -> Result<(), String> {
    let mut conf = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("读取配置失败: {}", e))?;
            Conf::from_json(&text).map_err(|e| format!("配置格式错误: {}", e))?
        }
        None => Conf::default(),
    };
    if args.keep_stage {
        conf.strip_stage_directions = false;
    }
    debug!("配置: {:?}", conf);

    let content = fs::read_to_string(&args.input).map_err(|e| format!("读取文件失败: {}", e))?;
    let parser = TeiParser::new(conf);
    let output = parser
        .parse(&content)
        .map_err(|e| format!("处理XML出错: {}", e))?;
    let conf = parser.conf();

    println!("XML处理成功！");
    println!("对白数量: {}", output.table.len());
    println!("角色数量: {}", output.cast.len());
    println!("解析时间: {}ms", output.parse_time);
    println!();
    println!("{}", output.table.to_text_preview(conf.preview_rows, conf.preview_cell_width));

    if let Some(path) = &args.out {
        write_xlsx(&output.table, &conf.sheet_name, path).map_err(|e| format!("导出失败: {}", e))?;
        println!("表格已保存到: {}", path);
    }
    if let Some(path) = &args.json {
        let json = output.table.to_json().map_err(|e| format!("导出失败: {}", e))?;
        fs::write(path, json).map_err(|e| format!("导出失败: {}", e))?;
        println!("JSON已保存到: {}", path);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let result = parse_args(&args).and_then(run);

    if let Err(message) = result {
        eprintln!("{}", message);
        process::exit(1);
    }
}
